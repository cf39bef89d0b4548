use std::io::Read;

use super::error::{DecodeError, Field};
use super::primitive::{read_fixed_u32, read_fixed_u64};
use crate::consts::{U32_SIZE, U64_SIZE};
use crate::model::Region;

/// Прочитать один регион: [start u64][end u64][nr_accesses u32].
/// Порядок адресов не проверяется; age/age_unit: заглушки v2.
pub fn decode_region<R: Read + ?Sized>(r: &mut R) -> Result<Region, DecodeError> {
    let start_addr = read_fixed_u64(r).map_err(|e| e.at(Field::StartAddr, U64_SIZE))?;
    let end_addr = read_fixed_u64(r).map_err(|e| e.at(Field::EndAddr, U64_SIZE))?;
    let accesses = read_fixed_u32(r).map_err(|e| e.at(Field::Accesses, U32_SIZE))?;
    Ok(Region::new(start_addr, end_addr, accesses))
}
