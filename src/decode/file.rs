//! decode/file: верхний уровень (заголовок, версия, цикл записей).
//!
//! Состояния: ExpectHeader → ExpectVersion → ReadingRecords → {Done | Failed}.
//!
//! - Заголовок/версия отвергнуты → PartialDecode { partial: None }.
//! - Единственная точка успешного завершения: EOF ровно на границе записи
//!   (ноль байт при чтении end time sec).
//! - Любой сбой внутри записи → PartialDecode { partial: Some(..) }: все готовые
//!   записи + текущая, если в ней уже есть хотя бы один целый снапшот.
//!
//! Курсор времени: локальная переменная цикла, передаётся в decode_record
//! аргументом; глобального состояния нет.

use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::error::{DecodeError, Field, PartialDecode, ReadError};
use super::primitive::{read_fixed, read_fixed_u32, read_fixed_u64};
use super::snapshot::decode_snapshot;
use crate::config::DecoderConfig;
use crate::consts::{MAGIC, MAGIC_SIZE, NSEC_PER_SEC, SUPPORTED_VERSION, U32_SIZE, U64_SIZE};
use crate::model::{DamonResult, Record};

/// Результат одного шага цикла записей.
enum RecordStep {
    /// Чистый EOF на границе записи.
    EndOfStream,
    Decoded { record: Record, end_time: u64 },
}

/// Сбой внутри записи: ошибка + недособранная запись (если есть целые снапшоты).
struct RecordFailure {
    partial: Option<Record>,
    error: DecodeError,
}

impl From<DecodeError> for RecordFailure {
    fn from(error: DecodeError) -> Self {
        Self {
            partial: None,
            error,
        }
    }
}

/// Открыть файл и декодировать его целиком.
///
/// Handle живёт только внутри вызова и закрывается на любом пути выхода.
pub fn decode_file(path: &Path, cfg: &DecoderConfig) -> Result<DamonResult, PartialDecode> {
    let f = File::open(path).map_err(|source| {
        PartialDecode::fatal(DecodeError::Open {
            path: path.to_path_buf(),
            source,
        })
    })?;
    debug!("decode_file: {} ({})", path.display(), cfg);
    let mut r = BufReader::with_capacity(cfg.read_buf_bytes, f);
    decode_stream(&mut r, cfg)
}

/// Декодировать буфер в памяти.
pub fn decode_bytes(bytes: &[u8], cfg: &DecoderConfig) -> Result<DamonResult, PartialDecode> {
    let mut r = bytes;
    decode_stream(&mut r, cfg)
}

/// Декодировать последовательный поток до EOF или первой ошибки.
pub fn decode_stream<R: Read + ?Sized>(
    r: &mut R,
    cfg: &DecoderConfig,
) -> Result<DamonResult, PartialDecode> {
    // ExpectHeader
    read_header(r).map_err(PartialDecode::fatal)?;

    // ExpectVersion
    let version = read_version(r).map_err(PartialDecode::fatal)?;

    // ReadingRecords
    let mut result = DamonResult::new(version);
    let mut cursor = 0u64;
    loop {
        match decode_record(r, cfg, cursor) {
            Ok(RecordStep::EndOfStream) => break,
            Ok(RecordStep::Decoded { record, end_time }) => {
                result.records.push(record);
                cursor = end_time;
            }
            Err(RecordFailure { partial, error }) => {
                if let Some(rec) = partial {
                    result.records.push(rec);
                }
                debug!(
                    "decode failed after {} record(s): {}",
                    result.records.len(),
                    error
                );
                return Err(PartialDecode::with_partial(result, error));
            }
        }
    }

    debug!(
        "decoded {} record(s), {} snapshot(s), {} region(s)",
        result.records.len(),
        result.snapshot_count(),
        result.region_count()
    );
    Ok(result)
}

fn read_header<R: Read + ?Sized>(r: &mut R) -> Result<(), DecodeError> {
    let mut magic = [0u8; MAGIC_SIZE];
    match read_fixed(r, &mut magic) {
        Ok(()) => {}
        // Файл короче заголовка: magic заведомо не совпадает.
        Err(ReadError::Eof) => return Err(DecodeError::invalid_header(&[])),
        Err(ReadError::Short { got, .. }) => return Err(DecodeError::invalid_header(&magic[..got])),
        Err(ReadError::Io(source)) => {
            return Err(DecodeError::Io {
                field: Field::Magic,
                source,
            })
        }
    }
    if &magic != MAGIC {
        return Err(DecodeError::invalid_header(&magic));
    }
    Ok(())
}

fn read_version<R: Read + ?Sized>(r: &mut R) -> Result<u32, DecodeError> {
    let version = read_fixed_u32(r).map_err(|e| e.at(Field::Version, U32_SIZE))?;
    if version != SUPPORTED_VERSION {
        return Err(DecodeError::UnsupportedVersion { version });
    }
    Ok(version)
}

/// Одна запись: [end_sec u64][end_nsec u64][nr_snapshots u32] + снапшоты.
/// start_time всех снапшотов = start_time (курсор), end_time = end из записи.
fn decode_record<R: Read + ?Sized>(
    r: &mut R,
    cfg: &DecoderConfig,
    start_time: u64,
) -> Result<RecordStep, RecordFailure> {
    let sec = match read_fixed_u64(r) {
        Ok(v) => v,
        Err(ReadError::Eof) => return Ok(RecordStep::EndOfStream),
        Err(e) => return Err(e.at(Field::EndTimeSec, U64_SIZE).into()),
    };
    let nsec = read_fixed_u64(r).map_err(|e| e.at(Field::EndTimeNsec, U64_SIZE))?;
    let end_time = sec.wrapping_mul(NSEC_PER_SEC).wrapping_add(nsec);
    if cfg.warn_non_monotonic && end_time < start_time {
        warn!(
            "record end time {} is before its start time {} (sec={}, nsec={})",
            end_time, start_time, sec, nsec
        );
    }

    let nr_snapshots = read_fixed_u32(r).map_err(|e| e.at(Field::SnapshotCount, U32_SIZE))?;

    let mut record = Record {
        target_id: 0,
        snapshots: Vec::with_capacity(cfg.capacity_for(nr_snapshots)),
    };
    for _ in 0..nr_snapshots {
        match decode_snapshot(r, cfg) {
            Ok(mut snapshot) => {
                snapshot.start_time = start_time;
                snapshot.end_time = end_time;
                record.snapshots.push(snapshot);
            }
            Err(error) => {
                let partial = if record.snapshots.is_empty() {
                    None
                } else {
                    Some(record)
                };
                return Err(RecordFailure { partial, error });
            }
        }
    }

    debug!(
        "record: [{}, {}] nr_snapshots={}",
        start_time, end_time, nr_snapshots
    );
    Ok(RecordStep::Decoded { record, end_time })
}
