use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use damonrec::{decode_file, DamonResult, DecoderConfig};

use crate::cli::IoArgs;

/// Открыть приёмник: файл (create/truncate) или stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let f = File::create(p).with_context(|| format!("create output {}", p.display()))?;
            Ok(Box::new(BufWriter::new(f)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Декодировать --input и отдать дерево в `emit`.
///
/// При ошибке декодирования без --allow-partial: сразу ошибка.
/// С --allow-partial частичный результат всё равно экспортируется,
/// а ошибка возвращается после записи (exit code 1).
pub fn with_decoded<F>(io: &IoArgs, emit: F) -> Result<()>
where
    F: FnOnce(&DamonResult, &mut dyn Write) -> Result<()>,
{
    let cfg = DecoderConfig::from_env();
    let (res, deferred) = match decode_file(&io.input, &cfg) {
        Ok(res) => (res, None),
        Err(e) => {
            let (partial, error) = e.into_parts();
            match partial {
                Some(p) if io.allow_partial => {
                    warn!(
                        "{}: {} (recovered {} record(s), {} snapshot(s))",
                        io.input.display(),
                        error,
                        p.records.len(),
                        p.snapshot_count()
                    );
                    (p, Some(error))
                }
                _ => {
                    return Err(anyhow::Error::new(error)
                        .context(format!("decode {}", io.input.display())))
                }
            }
        }
    };

    info!(
        "{}: version={} records={} snapshots={}",
        io.input.display(),
        res.version,
        res.records.len(),
        res.snapshot_count()
    );

    let mut out = open_output(io.output.as_deref())?;
    emit(&res, &mut *out)?;
    out.flush()?;

    match deferred {
        None => Ok(()),
        Some(error) => Err(anyhow!(
            "decode {}: {} (partial output written)",
            io.input.display(),
            error
        )),
    }
}
