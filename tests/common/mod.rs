//! Сборка синтетических record file в памяти для тестов.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub const MAGIC: &[u8; 16] = b"damon_recfmt_ver";

/// Поле, записанное билдером: смещение, размер и признак начала записи.
#[derive(Debug, Clone, Copy)]
pub struct FieldPos {
    pub offset: usize,
    pub size: usize,
    pub record_start: bool,
}

/// Builder of raw bytes in the v2 wire layout.
#[derive(Debug, Clone, Default)]
pub struct RecFile {
    buf: Vec<u8>,
    fields: Vec<FieldPos>,
}

impl RecFile {
    /// magic + version 2
    pub fn new() -> Self {
        Self::with_version(2)
    }

    pub fn with_version(v: u32) -> Self {
        let mut f = Self::raw();
        f.put(MAGIC, false);
        f.u32(v)
    }

    /// Пустой буфер без заголовка.
    pub fn raw() -> Self {
        Self::default()
    }

    fn put(&mut self, bytes: &[u8], record_start: bool) {
        self.fields.push(FieldPos {
            offset: self.buf.len(),
            size: bytes.len(),
            record_start,
        });
        self.buf.extend_from_slice(bytes);
    }

    pub fn u32(mut self, v: u32) -> Self {
        self.put(&v.to_le_bytes(), false);
        self
    }

    pub fn u64(mut self, v: u64) -> Self {
        self.put(&v.to_le_bytes(), false);
        self
    }

    pub fn bytes_raw(mut self, b: &[u8]) -> Self {
        self.put(b, false);
        self
    }

    /// [end_sec][end_nsec][nr_snapshots]
    pub fn record(mut self, sec: u64, nsec: u64, nr_snapshots: u32) -> Self {
        self.put(&sec.to_le_bytes(), true);
        self.u64(nsec).u32(nr_snapshots)
    }

    /// Record ending at an absolute time in nanoseconds.
    pub fn record_at(self, end_ns: u64, nr_snapshots: u32) -> Self {
        self.record(end_ns / 1_000_000_000, end_ns % 1_000_000_000, nr_snapshots)
    }

    /// [target_id][nr_regions]
    pub fn snapshot(self, target_id: u64, nr_regions: u32) -> Self {
        self.u64(target_id).u32(nr_regions)
    }

    /// [start][end][nr_accesses]
    pub fn region(self, start: u64, end: u64, accesses: u32) -> Self {
        self.u64(start).u64(end).u32(accesses)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn fields(&self) -> &[FieldPos] {
        &self.fields
    }
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub fn unique_file(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("damonrec-{prefix}-{pid}-{t}-{id}.data"))
}

/// End-to-end пример: одна запись, один снапшот, один регион.
pub fn single_region_file() -> RecFile {
    RecFile::new()
        .record(0, 500, 1)
        .snapshot(0, 1)
        .region(0x1000, 0x2000, 5)
}
