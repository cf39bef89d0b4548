use anyhow::Result;
use std::io::Write;

use crate::model::DamonResult;

/// Табличный вывод: время снапшотов относительно start time первого снапшота.
///
/// ```text
/// base_time_absolute: 0
///
/// monitoring_start:                   0
/// monitoring_end:                   500
/// monitoring_duration:              500
/// target_id: 0
/// nr_regions: 1
/// # start_addr     end_addr        length  nr_accesses   age
/// 000000001000-000000002000 (        4096)           5    -1
/// ```
pub fn write_table<W: Write + ?Sized>(w: &mut W, res: &DamonResult) -> Result<()> {
    let Some(base) = res.base_time() else {
        return Ok(());
    };
    writeln!(w, "base_time_absolute: {}\n", base)?;

    for snapshot in res.snapshots() {
        writeln!(
            w,
            "monitoring_start:    {:>16}",
            snapshot.start_time.wrapping_sub(base)
        )?;
        writeln!(
            w,
            "monitoring_end:      {:>16}",
            snapshot.end_time.wrapping_sub(base)
        )?;
        writeln!(w, "monitoring_duration: {:>16}", snapshot.duration())?;
        writeln!(w, "target_id: {}", snapshot.target_id)?;
        writeln!(w, "nr_regions: {}", snapshot.regions.len())?;
        writeln!(w, "# start_addr     end_addr        length  nr_accesses   age")?;
        for region in &snapshot.regions {
            writeln!(
                w,
                "{:012x}-{:012x} ({:>12}) {:>11} {:>5}",
                region.start_addr,
                region.end_addr,
                region.len(),
                region.number_of_accesses,
                region.age
            )?;
        }
        writeln!(w)?;
    }
    Ok(())
}
