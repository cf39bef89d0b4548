use anyhow::Result;

use damonrec::export::write_table;

use crate::cli::IoArgs;
use crate::util::with_decoded;

pub fn exec(io: IoArgs) -> Result<()> {
    with_decoded(&io, |res, out| write_table(out, res))
}
