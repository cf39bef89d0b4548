use anyhow::{Context, Result};
use std::io::Write;

use crate::model::DamonResult;

/// Сериализовать дерево как есть (одна строка JSON + '\n', либо pretty).
pub fn write_json<W: Write>(mut w: W, res: &DamonResult, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut w, res).context("serialize json")?;
    } else {
        serde_json::to_writer(&mut w, res).context("serialize json")?;
    }
    writeln!(w)?;
    Ok(())
}
