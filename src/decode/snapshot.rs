use log::trace;
use std::io::Read;

use super::error::{DecodeError, Field};
use super::primitive::{read_fixed_u32, read_fixed_u64};
use super::region::decode_region;
use crate::config::DecoderConfig;
use crate::consts::{SUPPORTED_TARGET_ID, U32_SIZE, U64_SIZE};
use crate::model::Snapshot;

/// Прочитать снапшот: [target_id u64][nr_regions u32] + регионы.
///
/// Время не читается: start/end назначает вызывающий код из интервала записи.
/// Ненулевой target id отвергается сразу: мультитаргет-файлы не группируем.
pub fn decode_snapshot<R: Read + ?Sized>(
    r: &mut R,
    cfg: &DecoderConfig,
) -> Result<Snapshot, DecodeError> {
    let target_id = read_fixed_u64(r).map_err(|e| e.at(Field::TargetId, U64_SIZE))?;
    if target_id != SUPPORTED_TARGET_ID {
        return Err(DecodeError::UnsupportedTargetId { target_id });
    }

    let nr_regions = read_fixed_u32(r).map_err(|e| e.at(Field::RegionCount, U32_SIZE))?;
    trace!("snapshot: target_id={} nr_regions={}", target_id, nr_regions);

    let mut regions = Vec::with_capacity(cfg.capacity_for(nr_regions));
    for _ in 0..nr_regions {
        regions.push(decode_region(r)?);
    }

    Ok(Snapshot {
        target_id,
        start_time: 0,
        end_time: 0,
        regions,
    })
}
