//! Ошибки декодера.
//!
//! Каждая ошибка несёт поле, на чтении которого она возникла. `PartialDecode`
//! возвращает вместе с ошибкой всё, что успели собрать до сбоя.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::consts::MAGIC_SIZE;
use crate::model::DamonResult;

/// Поле формата, которое читалось в момент ошибки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Magic,
    Version,
    EndTimeSec,
    EndTimeNsec,
    SnapshotCount,
    TargetId,
    RegionCount,
    StartAddr,
    EndAddr,
    Accesses,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Magic => "magic",
            Field::Version => "version",
            Field::EndTimeSec => "end time sec",
            Field::EndTimeNsec => "end time nsec",
            Field::SnapshotCount => "number of snapshots",
            Field::TargetId => "target id",
            Field::RegionCount => "number of regions",
            Field::StartAddr => "start address",
            Field::EndAddr => "end address",
            Field::Accesses => "number of accesses",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Сбой примитивного чтения фиксированной ширины.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Ноль байт на границе вызова: возможный чистый конец потока.
    #[error("end of stream")]
    Eof,
    /// Часть байтов есть, но не все: всегда усечение.
    #[error("read {got} bytes, expected {expected}")]
    Short { got: usize, expected: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ReadError {
    /// Привязать ошибку чтения к полю. `Eof` здесь: тоже усечение (got = 0);
    /// чистый конец потока вызывающий код обрабатывает до этого.
    pub fn at(self, field: Field, expected: usize) -> DecodeError {
        match self {
            ReadError::Eof => DecodeError::TruncatedRecord {
                field,
                got: 0,
                expected,
            },
            ReadError::Short { got, expected } => DecodeError::TruncatedRecord {
                field,
                got,
                expected,
            },
            ReadError::Io(source) => DecodeError::Io { field, source },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{field} error: i/o failure")]
    Io {
        field: Field,
        #[source]
        source: io::Error,
    },

    #[error("invalid header: {:?}", String::from_utf8_lossy(.found))]
    InvalidHeader { found: Vec<u8> },

    #[error("invalid version: {version} (only version 2 is supported)")]
    UnsupportedVersion { version: u32 },

    #[error("invalid target id: {target_id} (only 0 is supported)")]
    UnsupportedTargetId { target_id: u64 },

    #[error("{field} error: truncated record (read {got} bytes, expected {expected})")]
    TruncatedRecord {
        field: Field,
        got: usize,
        expected: usize,
    },
}

impl DecodeError {
    /// Поле, на котором произошёл сбой (если применимо).
    pub fn field(&self) -> Option<Field> {
        match self {
            DecodeError::Io { field, .. } | DecodeError::TruncatedRecord { field, .. } => {
                Some(*field)
            }
            DecodeError::InvalidHeader { .. } => Some(Field::Magic),
            DecodeError::UnsupportedVersion { .. } => Some(Field::Version),
            DecodeError::UnsupportedTargetId { .. } => Some(Field::TargetId),
            DecodeError::Open { .. } => None,
        }
    }

    pub fn is_truncation(&self) -> bool {
        matches!(self, DecodeError::TruncatedRecord { .. })
    }

    pub(crate) fn invalid_header(found: &[u8]) -> Self {
        let n = found.len().min(MAGIC_SIZE);
        DecodeError::InvalidHeader {
            found: found[..n].to_vec(),
        }
    }
}

/// Неуспешный decode: ошибка + частичный результат.
///
/// `partial` is `None` when the header or the version was rejected (nothing was
/// decoded yet), otherwise it holds every fully decoded record, plus the
/// in-progress record if at least one of its snapshots was complete.
#[derive(Debug, thiserror::Error)]
#[error("decode failed")]
pub struct PartialDecode {
    pub partial: Option<DamonResult>,
    #[source]
    pub error: DecodeError,
}

impl PartialDecode {
    pub(crate) fn fatal(error: DecodeError) -> Self {
        Self {
            partial: None,
            error,
        }
    }

    pub(crate) fn with_partial(partial: DamonResult, error: DecodeError) -> Self {
        Self {
            partial: Some(partial),
            error,
        }
    }

    pub fn into_parts(self) -> (Option<DamonResult>, DecodeError) {
        (self.partial, self.error)
    }
}

/// Result + optional error, for callers that prefer a single shape.
pub fn split_outcome(
    outcome: Result<DamonResult, PartialDecode>,
) -> (Option<DamonResult>, Option<DecodeError>) {
    match outcome {
        Ok(res) => (Some(res), None),
        Err(e) => {
            let (partial, error) = e.into_parts();
            (partial, Some(error))
        }
    }
}
