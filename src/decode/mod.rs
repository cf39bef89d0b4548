//! Декодер DAMON record file (damon_recfmt_ver v2).
//!
//! Слои (снизу вверх):
//! - primitive.rs : LE u32/u64 фиксированной ширины, Eof vs Short.
//! - region.rs    : один регион.
//! - snapshot.rs  : target id + регионы.
//! - file.rs      : заголовок, версия, цикл записей с курсором времени.
//! - error.rs     : таксономия ошибок и PartialDecode.

pub mod error;
pub mod file;
pub mod primitive;
pub mod region;
pub mod snapshot;

pub use error::{split_outcome, DecodeError, Field, PartialDecode, ReadError};
pub use file::{decode_bytes, decode_file, decode_stream};
pub use primitive::{read_fixed_u32, read_fixed_u64};
pub use region::decode_region;
pub use snapshot::decode_snapshot;
