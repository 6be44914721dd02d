//! Network little-endian NBT decoding for item payloads.
#![forbid(unsafe_code)]

pub mod reader;
pub mod value;

pub use reader::{MAX_DEPTH, from_network_bytes, read_named_root};
pub use value::{Compound, NbtValue, TagType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NbtError {
    #[error("unexpected end of input at offset {offset} (wanted {wanted} more bytes)")]
    UnexpectedEof { offset: usize, wanted: usize },

    #[error("unknown tag type {tag} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },

    #[error("end tag used as a value at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("root tag must be a compound, found tag type {tag}")]
    RootNotCompound { tag: u8 },

    #[error("varint at offset {offset} is longer than {max_bytes} bytes")]
    VarIntTooLong { offset: usize, max_bytes: usize },

    #[error("negative length {len} at offset {offset}")]
    NegativeLength { len: i32, offset: usize },

    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    #[error("nesting deeper than {max} levels at offset {offset}")]
    DepthExceeded { max: usize, offset: usize },

    #[error("{count} trailing bytes after root compound")]
    TrailingBytes { count: usize },
}
