use crate::value::{Value, ValueKind};

/// The leading byte of an encoded value, identifying its type.
///
/// Opcodes are not identical to [`ValueKind::index`]: booleans carry
/// their value in one of two opcodes, shifting every later kind up
/// by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Null = 0,
    True = 1,
    False = 2,
    Int32 = 3,
    Int64 = 4,
    Double = 5,
    String = 6,
    ListUInt8 = 7,
    ListBool = 8,
    ListInt32 = 9,
    ListInt64 = 10,
    ListDouble = 11,
    ListString = 12,
    Map = 13,
    CompositeList = 14,
}

impl Opcode {
    /// Gets the opcode for a boolean value.
    #[inline]
    pub const fn of_bool(v: bool) -> Self {
        if v {
            Self::True
        } else {
            Self::False
        }
    }

    /// Gets the opcode `value` is encoded with.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(v) => Self::of_bool(*v),
            Value::Int32(..) => Self::Int32,
            Value::Int64(..) => Self::Int64,
            Value::Double(..) => Self::Double,
            Value::String(..) => Self::String,
            Value::ListUInt8(..) => Self::ListUInt8,
            Value::ListBool(..) => Self::ListBool,
            Value::ListInt32(..) => Self::ListInt32,
            Value::ListInt64(..) => Self::ListInt64,
            Value::ListDouble(..) => Self::ListDouble,
            Value::ListString(..) => Self::ListString,
            Value::Map(..) => Self::Map,
            Value::CompositeList(..) => Self::CompositeList,
        }
    }

    /// Gets the [`ValueKind`] this opcode decodes to.
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::True | Self::False => ValueKind::Bool,
            Self::Int32 => ValueKind::Int32,
            Self::Int64 => ValueKind::Int64,
            Self::Double => ValueKind::Double,
            Self::String => ValueKind::String,
            Self::ListUInt8 => ValueKind::ListUInt8,
            Self::ListBool => ValueKind::ListBool,
            Self::ListInt32 => ValueKind::ListInt32,
            Self::ListInt64 => ValueKind::ListInt64,
            Self::ListDouble => ValueKind::ListDouble,
            Self::ListString => ValueKind::ListString,
            Self::Map => ValueKind::Map,
            Self::CompositeList => ValueKind::CompositeList,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        let op = match v {
            0 => Self::Null,
            1 => Self::True,
            2 => Self::False,
            3 => Self::Int32,
            4 => Self::Int64,
            5 => Self::Double,
            6 => Self::String,
            7 => Self::ListUInt8,
            8 => Self::ListBool,
            9 => Self::ListInt32,
            10 => Self::ListInt64,
            11 => Self::ListDouble,
            12 => Self::ListString,
            13 => Self::Map,
            14 => Self::CompositeList,
            _ => return Err(v),
        };

        Ok(op)
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op as u8
    }
}
