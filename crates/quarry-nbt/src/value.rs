use std::collections::BTreeMap;

/// Named tags of a compound. Ordered by key so iteration (and `Debug`) is stable.
pub type Compound = BTreeMap<String, NbtValue>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TagType {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagType {
    pub fn from_id(id: u8) -> Option<TagType> {
        Some(match id {
            0 => TagType::End,
            1 => TagType::Byte,
            2 => TagType::Short,
            3 => TagType::Int,
            4 => TagType::Long,
            5 => TagType::Float,
            6 => TagType::Double,
            7 => TagType::ByteArray,
            8 => TagType::String,
            9 => TagType::List,
            10 => TagType::Compound,
            11 => TagType::IntArray,
            12 => TagType::LongArray,
            _ => return None,
        })
    }

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NbtValue {
    Byte(u8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    List(Vec<NbtValue>),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl NbtValue {
    pub fn tag_type(&self) -> TagType {
        match self {
            NbtValue::Byte(_) => TagType::Byte,
            NbtValue::Short(_) => TagType::Short,
            NbtValue::Int(_) => TagType::Int,
            NbtValue::Long(_) => TagType::Long,
            NbtValue::Float(_) => TagType::Float,
            NbtValue::Double(_) => TagType::Double,
            NbtValue::ByteArray(_) => TagType::ByteArray,
            NbtValue::String(_) => TagType::String,
            NbtValue::List(_) => TagType::List,
            NbtValue::Compound(_) => TagType::Compound,
            NbtValue::IntArray(_) => TagType::IntArray,
            NbtValue::LongArray(_) => TagType::LongArray,
        }
    }

    pub fn as_byte(&self) -> Option<u8> {
        match self {
            NbtValue::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            NbtValue::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            NbtValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Any integral scalar widened to i64. Item payloads are not consistent about
    /// which width they use for small numbers, so decoders read through this.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NbtValue::Byte(v) => Some(*v as i64),
            NbtValue::Short(v) => Some(*v as i64),
            NbtValue::Int(v) => Some(*v as i64),
            NbtValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[u8]> {
        match self {
            NbtValue::ByteArray(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[NbtValue]> {
        match self {
            NbtValue::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            NbtValue::Compound(c) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_ids_roundtrip_through_from_id() {
        for id in 0u8..=12 {
            let ty = TagType::from_id(id).expect("known tag");
            assert_eq!(ty.id(), id);
        }
        assert_eq!(TagType::from_id(13), None);
        assert_eq!(TagType::from_id(0xff), None);
    }

    #[test]
    fn as_integer_widens_scalars_only() {
        assert_eq!(NbtValue::Byte(200).as_integer(), Some(200));
        assert_eq!(NbtValue::Short(-3).as_integer(), Some(-3));
        assert_eq!(NbtValue::Int(70_000).as_integer(), Some(70_000));
        assert_eq!(NbtValue::Long(-1).as_integer(), Some(-1));
        assert_eq!(NbtValue::Float(1.0).as_integer(), None);
        assert_eq!(NbtValue::String("1".into()).as_integer(), None);
    }

    #[test]
    fn typed_accessors_reject_other_kinds() {
        let v = NbtValue::Short(4);
        assert_eq!(v.as_short(), Some(4));
        assert_eq!(v.as_int(), None);
        assert!(v.as_list().is_none());
        assert!(v.as_compound().is_none());
        assert_eq!(v.tag_type(), TagType::Short);
    }
}
