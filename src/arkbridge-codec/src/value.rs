//! Value representations for the bridge codec.
//!
//! Values have dynamic types and can be composed, at the cost of
//! incurring memory and performance overhead.

mod drop;

mod list;
pub use list::*;

mod map;
pub use map::*;

mod ord;

/// Values within this distance of an integer are treated as integral
/// by [`Value::from_number`].
pub const FRACTION_EPSILON: f64 = 0.00001;

/// A value transmitted over the message bridge.
///
/// Its type is dynamically assigned at runtime, which mandates
/// appropriate checks for interpreting its contents.
///
/// Values are totally ordered so they can be used as [`Map`] keys.
/// Variants order by their declaration, payloads of the same variant
/// by their contents. Doubles use the IEEE 754 `totalOrder` predicate,
/// which is also what equality is based on.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 32-bit signed integer.
    Int32(i32),
    /// A 64-bit signed integer.
    Int64(i64),
    /// A double precision floating-point value.
    Double(f64),
    /// An UTF-8 string.
    String(String),

    /// A sequence of raw bytes.
    ListUInt8(Vec<u8>),
    /// A sequence of booleans.
    ListBool(Vec<bool>),
    /// A sequence of 32-bit signed integers.
    ListInt32(Vec<i32>),
    /// A sequence of 64-bit signed integers.
    ListInt64(Vec<i64>),
    /// A sequence of double precision floating-point values.
    ListDouble(Vec<f64>),
    /// A sequence of strings.
    ListString(Vec<String>),

    /// An ordered mapping of values to values.
    Map(Map),
    /// A heterogeneous sequence of values.
    CompositeList(List),
}

/// The type of a [`Value`], without its payload.
///
/// Kinds are ordered by their tag index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int32,
    Int64,
    Double,
    String,
    ListUInt8,
    ListBool,
    ListInt32,
    ListInt64,
    ListDouble,
    ListString,
    Map,
    CompositeList,
}

impl ValueKind {
    /// Every kind, in tag index order.
    pub const ALL: [ValueKind; 14] = [
        Self::Null,
        Self::Bool,
        Self::Int32,
        Self::Int64,
        Self::Double,
        Self::String,
        Self::ListUInt8,
        Self::ListBool,
        Self::ListInt32,
        Self::ListInt64,
        Self::ListDouble,
        Self::ListString,
        Self::Map,
        Self::CompositeList,
    ];

    /// Gets the tag index of this kind, with [`ValueKind::Null`] at 0.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Value {
    /// Gets the [`ValueKind`] of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(..) => ValueKind::Bool,
            Self::Int32(..) => ValueKind::Int32,
            Self::Int64(..) => ValueKind::Int64,
            Self::Double(..) => ValueKind::Double,
            Self::String(..) => ValueKind::String,
            Self::ListUInt8(..) => ValueKind::ListUInt8,
            Self::ListBool(..) => ValueKind::ListBool,
            Self::ListInt32(..) => ValueKind::ListInt32,
            Self::ListInt64(..) => ValueKind::ListInt64,
            Self::ListDouble(..) => ValueKind::ListDouble,
            Self::ListString(..) => ValueKind::ListString,
            Self::Map(..) => ValueKind::Map,
            Self::CompositeList(..) => ValueKind::CompositeList,
        }
    }

    /// Whether this is [`Value::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Classifies a JavaScript number into the narrowest fitting variant.
    ///
    /// Numbers with a fractional part beyond [`FRACTION_EPSILON`] become
    /// doubles. Integral numbers become [`Value::Int32`] or
    /// [`Value::Int64`] by range, and doubles again when they exceed
    /// the 64-bit range or are not finite.
    pub fn from_number(v: f64) -> Self {
        if !v.is_finite() || (v - v.trunc()).abs() > FRACTION_EPSILON {
            return Self::Double(v);
        }

        let v = v.trunc();
        if (i32::MIN as f64..=i32::MAX as f64).contains(&v) {
            Self::Int32(v as i32)
        } else if (i64::MIN as f64..i64::MAX as f64).contains(&v) {
            Self::Int64(v as i64)
        } else {
            Self::Double(v)
        }
    }

    /// Packs the arguments of a native call into a
    /// [`Value::CompositeList`].
    ///
    /// A call without arguments produces an empty list.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::CompositeList(args.into_iter().collect())
    }

    /// Unpacks at most `max` call arguments from a
    /// [`Value::CompositeList`].
    ///
    /// Any other value carries no arguments.
    pub fn into_args(self, max: usize) -> Vec<Value> {
        match self {
            Self::CompositeList(list) => list.into_iter().take(max).collect(),
            _ => Vec::new(),
        }
    }
}

macro_rules! from_impl {
    ($($ty:ty => $variant:ident),* $(,)*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

from_impl! {
    bool => Bool,
    i32 => Int32,
    i64 => Int64,
    f64 => Double,
    String => String,
    &str => String,
    Vec<u8> => ListUInt8,
    Vec<bool> => ListBool,
    Vec<i32> => ListInt32,
    Vec<i64> => ListInt64,
    Vec<f64> => ListDouble,
    Vec<String> => ListString,
    Map => Map,
    List => CompositeList,
    Vec<Value> => CompositeList,
}
