use anyhow::Result;

use damonrec::export::write_json;

use crate::cli::IoArgs;
use crate::util::with_decoded;

pub fn exec(io: IoArgs, pretty: bool) -> Result<()> {
    with_decoded(&io, |res, out| write_json(out, res, pretty))
}
