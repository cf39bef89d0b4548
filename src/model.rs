//! Модель декодированного файла: DamonResult → Record → Snapshot → Region.
//!
//! Имена полей в JSON: PascalCase
//! (Version, Records, TargetId, StartAddr, NumberOfAccesses, ...).

use serde::{Deserialize, Serialize};

use crate::consts::{AGE_NOT_PRESENT, AGE_UNIT_NOT_PRESENT, SUPPORTED_VERSION};

/// Результат декодирования одного файла.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DamonResult {
    pub version: u32, // == 2
    pub records: Vec<Record>,
}

impl Default for DamonResult {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            records: Vec::new(),
        }
    }
}

impl DamonResult {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            records: Vec::new(),
        }
    }

    /// Все снапшоты в порядке файла.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.records.iter().flat_map(|r| r.snapshots.iter())
    }

    /// Start time of the first snapshot (base for relative times in the table view).
    pub fn base_time(&self) -> Option<u64> {
        self.snapshots().next().map(|s| s.start_time)
    }

    pub fn snapshot_count(&self) -> usize {
        self.records.iter().map(|r| r.snapshots.len()).sum()
    }

    pub fn region_count(&self) -> usize {
        self.snapshots().map(|s| s.regions.len()).sum()
    }
}

/// Группа снапшотов одного интервала семплирования.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    /// Reserved. The wire format has no per-record target id; the decoder
    /// never fills it and it does not mirror the snapshots' target ids.
    pub target_id: u64,
    pub snapshots: Vec<Snapshot>,
}

/// Одно измерение всех регионов цели внутри интервала записи.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Snapshot {
    pub target_id: u64,  // всегда 0
    pub start_time: u64, // ns, из курсора (не читается с провода)
    pub end_time: u64,   // ns, end time записи
    pub regions: Vec<Region>,
}

impl Snapshot {
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end_time.wrapping_sub(self.start_time)
    }
}

/// Непрерывный диапазон виртуальных адресов с числом обращений.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    pub start_addr: u64,
    pub end_addr: u64,
    pub number_of_accesses: u32,
    /// -1: поля нет в v2.
    pub age: i64,
    /// Пустая строка в v2; зарезервировано.
    pub age_unit: String,
}

impl Region {
    /// Region with the v2 placeholders for age/age_unit.
    pub fn new(start_addr: u64, end_addr: u64, number_of_accesses: u32) -> Self {
        Self {
            start_addr,
            end_addr,
            number_of_accesses,
            age: AGE_NOT_PRESENT,
            age_unit: AGE_UNIT_NOT_PRESENT.to_string(),
        }
    }

    /// end - start. Degenerate ranges are not rejected by the decoder, so wrap.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end_addr.wrapping_sub(self.start_addr)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_addr == self.end_addr
    }
}
