use anyhow::Result;

use damonrec::export::Summary;

use crate::cli::IoArgs;
use crate::util::with_decoded;

pub fn exec(io: IoArgs, json: bool) -> Result<()> {
    with_decoded(&io, |res, out| {
        let s = Summary::of(res);
        if json {
            s.write_json(out)
        } else {
            s.write_text(out)
        }
    })
}
