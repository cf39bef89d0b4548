use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::model::DamonResult;

/// Агрегаты по декодированному файлу (аналог status для record file).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub version: u32,
    pub records: usize,
    pub snapshots: usize,
    pub regions: usize,
    /// Start time первого снапшота (ns).
    pub first_start: Option<u64>,
    /// End time последнего снапшота (ns).
    pub last_end: Option<u64>,
    pub duration_ns: u64,
    pub max_regions_per_snapshot: usize,
    pub total_accesses: u64,
    pub empty_records: usize,
}

impl Summary {
    pub fn of(res: &DamonResult) -> Self {
        let mut s = Summary {
            version: res.version,
            records: res.records.len(),
            ..Default::default()
        };

        for record in &res.records {
            if record.snapshots.is_empty() {
                s.empty_records += 1;
            }
            for snapshot in &record.snapshots {
                s.snapshots += 1;
                s.regions += snapshot.regions.len();
                s.max_regions_per_snapshot = s.max_regions_per_snapshot.max(snapshot.regions.len());
                s.total_accesses += snapshot
                    .regions
                    .iter()
                    .map(|r| r.number_of_accesses as u64)
                    .sum::<u64>();
                if s.first_start.is_none() {
                    s.first_start = Some(snapshot.start_time);
                }
                s.last_end = Some(snapshot.end_time);
            }
        }

        if let (Some(a), Some(b)) = (s.first_start, s.last_end) {
            s.duration_ns = b.saturating_sub(a);
        }
        s
    }

    pub fn write_text<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "DAMON record file")?;
        writeln!(w, "  version          = {}", self.version)?;
        writeln!(w, "  records          = {}", self.records)?;
        writeln!(w, "    empty          = {}", self.empty_records)?;
        writeln!(w, "  snapshots        = {}", self.snapshots)?;
        writeln!(w, "  regions          = {}", self.regions)?;
        writeln!(w, "    max/snapshot   = {}", self.max_regions_per_snapshot)?;
        writeln!(w, "  total_accesses   = {}", self.total_accesses)?;
        match (self.first_start, self.last_end) {
            (Some(a), Some(b)) => {
                writeln!(w, "  time_range_ns    = [{} .. {}]", a, b)?;
                writeln!(w, "  duration_ns      = {}", self.duration_ns)?;
            }
            _ => writeln!(w, "  time_range_ns    = (no snapshots)")?,
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, mut w: W) -> Result<()> {
        serde_json::to_writer(&mut w, self)?;
        writeln!(w)?;
        Ok(())
    }
}
