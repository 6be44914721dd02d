//! Decoder for the network little-endian NBT variant.
//!
//! Layout differences from the classic big-endian format:
//! - Int and Long payloads are zigzag varints (at most 5 and 10 bytes).
//! - String lengths are unsigned varint32.
//! - List and array lengths are zigzag varint32.
//! - Short, Float and Double stay fixed-width little-endian.

use crate::NbtError;
use crate::value::{Compound, NbtValue, TagType};

/// Deepest compound/list nesting accepted before the input is rejected.
pub const MAX_DEPTH: usize = 512;

/// Decodes a complete document whose root is a compound and returns its contents.
/// The root name is discarded; item payloads always use an empty one.
pub fn from_network_bytes(data: &[u8]) -> Result<Compound, NbtError> {
    read_named_root(data).map(|(_, c)| c)
}

/// Decodes a complete document and returns the root name alongside the compound.
pub fn read_named_root(data: &[u8]) -> Result<(String, Compound), NbtError> {
    let mut r = Reader { buf: data, pos: 0 };
    let tag = r.u8()?;
    if tag != TagType::Compound.id() {
        return Err(NbtError::RootNotCompound { tag });
    }
    let name = r.string()?;
    let root = r.compound(1)?;
    if r.remaining() != 0 {
        return Err(NbtError::TrailingBytes {
            count: r.remaining(),
        });
    }
    Ok((name, root))
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], NbtError> {
        if self.remaining() < n {
            return Err(NbtError::UnexpectedEof {
                offset: self.pos,
                wanted: n,
            });
        }
        let s = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(s)
    }

    #[inline]
    fn u8(&mut self) -> Result<u8, NbtError> {
        Ok(self.take(1)?[0])
    }

    fn i16_le(&mut self) -> Result<i16, NbtError> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    fn f32_le(&mut self) -> Result<f32, NbtError> {
        let b = self.take(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn f64_le(&mut self) -> Result<f64, NbtError> {
        let b = self.take(8)?;
        Ok(f64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    fn var_u32(&mut self) -> Result<u32, NbtError> {
        let start = self.pos;
        let mut v: u32 = 0;
        for i in 0..5 {
            let byte = self.u8()?;
            v |= ((byte & 0x7f) as u32) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(v);
            }
        }
        Err(NbtError::VarIntTooLong {
            offset: start,
            max_bytes: 5,
        })
    }

    fn var_u64(&mut self) -> Result<u64, NbtError> {
        let start = self.pos;
        let mut v: u64 = 0;
        for i in 0..10 {
            let byte = self.u8()?;
            v |= ((byte & 0x7f) as u64) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(v);
            }
        }
        Err(NbtError::VarIntTooLong {
            offset: start,
            max_bytes: 10,
        })
    }

    #[inline]
    fn var_i32(&mut self) -> Result<i32, NbtError> {
        let u = self.var_u32()?;
        Ok(((u >> 1) as i32) ^ -((u & 1) as i32))
    }

    #[inline]
    fn var_i64(&mut self) -> Result<i64, NbtError> {
        let u = self.var_u64()?;
        Ok(((u >> 1) as i64) ^ -((u & 1) as i64))
    }

    fn len(&mut self) -> Result<usize, NbtError> {
        let offset = self.pos;
        let len = self.var_i32()?;
        if len < 0 {
            return Err(NbtError::NegativeLength { len, offset });
        }
        Ok(len as usize)
    }

    fn string(&mut self) -> Result<String, NbtError> {
        let n = self.var_u32()? as usize;
        let offset = self.pos;
        let bytes = self.take(n)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| NbtError::InvalidUtf8 { offset })
    }

    fn compound(&mut self, depth: usize) -> Result<Compound, NbtError> {
        if depth > MAX_DEPTH {
            return Err(NbtError::DepthExceeded {
                max: MAX_DEPTH,
                offset: self.pos,
            });
        }
        let mut out = Compound::new();
        loop {
            let tag = self.u8()?;
            if tag == TagType::End.id() {
                return Ok(out);
            }
            let name = self.string()?;
            let value = self.payload(tag, depth)?;
            out.insert(name, value);
        }
    }

    fn list(&mut self, depth: usize) -> Result<Vec<NbtValue>, NbtError> {
        if depth > MAX_DEPTH {
            return Err(NbtError::DepthExceeded {
                max: MAX_DEPTH,
                offset: self.pos,
            });
        }
        let elem = self.u8()?;
        let n = self.len()?;
        // Empty lists are commonly written with an End element type.
        if n == 0 {
            return Ok(Vec::new());
        }
        let mut out = Vec::with_capacity(n.min(self.remaining()));
        for _ in 0..n {
            out.push(self.payload(elem, depth)?);
        }
        Ok(out)
    }

    fn payload(&mut self, tag: u8, depth: usize) -> Result<NbtValue, NbtError> {
        let offset = self.pos;
        let Some(ty) = TagType::from_id(tag) else {
            return Err(NbtError::UnknownTag { tag, offset });
        };
        Ok(match ty {
            TagType::End => return Err(NbtError::UnexpectedEnd { offset }),
            TagType::Byte => NbtValue::Byte(self.u8()?),
            TagType::Short => NbtValue::Short(self.i16_le()?),
            TagType::Int => NbtValue::Int(self.var_i32()?),
            TagType::Long => NbtValue::Long(self.var_i64()?),
            TagType::Float => NbtValue::Float(self.f32_le()?),
            TagType::Double => NbtValue::Double(self.f64_le()?),
            TagType::ByteArray => {
                let n = self.len()?;
                NbtValue::ByteArray(self.take(n)?.to_vec())
            }
            TagType::String => NbtValue::String(self.string()?),
            TagType::List => NbtValue::List(self.list(depth + 1)?),
            TagType::Compound => NbtValue::Compound(self.compound(depth + 1)?),
            TagType::IntArray => {
                let n = self.len()?;
                let mut v = Vec::with_capacity(n.min(self.remaining()));
                for _ in 0..n {
                    v.push(self.var_i32()?);
                }
                NbtValue::IntArray(v)
            }
            TagType::LongArray => {
                let n = self.len()?;
                let mut v = Vec::with_capacity(n.min(self.remaining()));
                for _ in 0..n {
                    v.push(self.var_i64()?);
                }
                NbtValue::LongArray(v)
            }
        })
    }
}
