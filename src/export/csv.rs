use anyhow::Result;
use std::io::Write;

use crate::model::DamonResult;

pub const CSV_HEADER: &str = "start_time,end_time,target_id,start_addr,end_addr,nr_accesses,age";

/// Плоский CSV: строка на регион с временем и target id его снапшота,
/// пустая строка-разделитель после каждого снапшота.
///
/// Все поля числовые, экранирование не требуется.
pub fn write_csv<W: Write + ?Sized>(w: &mut W, res: &DamonResult) -> Result<()> {
    writeln!(w, "{}", CSV_HEADER)?;
    for snapshot in res.snapshots() {
        for region in &snapshot.regions {
            writeln!(
                w,
                "{},{},{},{},{},{},{}",
                snapshot.start_time,
                snapshot.end_time,
                snapshot.target_id,
                region.start_addr,
                region.end_addr,
                region.number_of_accesses,
                region.age
            )?;
        }
        writeln!(w)?;
    }
    Ok(())
}
