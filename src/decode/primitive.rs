//! Примитивные чтения фиксированной ширины (LE u32/u64).
//!
//! `read_exact` не говорит, сколько байт успел прочитать, а здесь важно
//! отличать "ноль байт на границе" (возможный EOF) от короткого чтения.

use byteorder::{ByteOrder, LittleEndian};
use std::io::{ErrorKind, Read};

use super::error::ReadError;
use crate::consts::{U32_SIZE, U64_SIZE};

/// Заполнить buf целиком. Ok(()) только если прочитано buf.len() байт.
pub fn read_fixed<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> Result<(), ReadError> {
    let mut got = 0usize;
    while got < buf.len() {
        match r.read(&mut buf[got..]) {
            Ok(0) => break,
            Ok(n) => got += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ReadError::Io(e)),
        }
    }
    if got == buf.len() {
        Ok(())
    } else if got == 0 {
        Err(ReadError::Eof)
    } else {
        Err(ReadError::Short {
            got,
            expected: buf.len(),
        })
    }
}

pub fn read_fixed_u32<R: Read + ?Sized>(r: &mut R) -> Result<u32, ReadError> {
    let mut b = [0u8; U32_SIZE];
    read_fixed(r, &mut b)?;
    Ok(LittleEndian::read_u32(&b))
}

pub fn read_fixed_u64<R: Read + ?Sized>(r: &mut R) -> Result<u64, ReadError> {
    let mut b = [0u8; U64_SIZE];
    read_fixed(r, &mut b)?;
    Ok(LittleEndian::read_u64(&b))
}
