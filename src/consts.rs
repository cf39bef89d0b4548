//! Константы формата DAMON record file (damon_recfmt_ver, v2).
//!
//! Layout (LE):
//! [magic 16]["damon_recfmt_ver"]
//! [version u32 = 2]
//! повтор до EOF:
//!   [end_sec u64][end_nsec u64][nr_snapshots u32]
//!   × nr_snapshots: [target_id u64][nr_regions u32]
//!     × nr_regions: [start u64][end u64][nr_accesses u32]

// -------- Header --------
pub const MAGIC: &[u8; 16] = b"damon_recfmt_ver";
pub const MAGIC_SIZE: usize = 16;

pub const SUPPORTED_VERSION: u32 = 2;

// Мультитаргет не поддерживается: принимаем только target 0.
pub const SUPPORTED_TARGET_ID: u64 = 0;

// -------- Time --------
pub const NSEC_PER_SEC: u64 = 1_000_000_000;

// -------- Region defaults (в v2 на проводе этих полей нет) --------
pub const AGE_NOT_PRESENT: i64 = -1;
pub const AGE_UNIT_NOT_PRESENT: &str = "";

// -------- Sizes --------
pub const U32_SIZE: usize = 4;
pub const U64_SIZE: usize = 8;

// -------- Input --------
pub const DEFAULT_INPUT: &str = "damon.data";
