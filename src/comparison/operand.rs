// SPDX-License-Identifier: MIT

//! Dynamically-typed comparison operands
//!
//! Numbers keep their declared width. Conversions between widths follow
//! boxed-number semantics: float to integer saturates (NaN becomes 0),
//! integer narrowing wraps, and float to short/byte narrows through i32.

use super::types::TypeDescriptor;
use crate::error::ComparisonError;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A number of a specific declared width
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Number {
    /// Short name of the declared width, e.g. `"int"`
    pub fn kind_name(&self) -> &'static str {
        match self {
            Number::Byte(_) => "byte",
            Number::Short(_) => "short",
            Number::Int(_) => "int",
            Number::Long(_) => "long",
            Number::Float(_) => "float",
            Number::Double(_) => "double",
        }
    }

    /// Widen or convert to f64
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Byte(v) => v as f64,
            Number::Short(v) => v as f64,
            Number::Int(v) => v as f64,
            Number::Long(v) => v as f64,
            Number::Float(v) => v as f64,
            Number::Double(v) => v,
        }
    }

    /// Convert to f32, rounding wider values
    pub fn as_f32(&self) -> f32 {
        match *self {
            Number::Byte(v) => v as f32,
            Number::Short(v) => v as f32,
            Number::Int(v) => v as f32,
            Number::Long(v) => v as f32,
            Number::Float(v) => v,
            Number::Double(v) => v as f32,
        }
    }

    /// Convert to i64; floats truncate and saturate, NaN becomes 0
    pub fn as_i64(&self) -> i64 {
        match *self {
            Number::Byte(v) => v as i64,
            Number::Short(v) => v as i64,
            Number::Int(v) => v as i64,
            Number::Long(v) => v,
            Number::Float(v) => v as i64,
            Number::Double(v) => v as i64,
        }
    }

    /// Convert to i32; longs wrap, floats truncate and saturate
    pub fn as_i32(&self) -> i32 {
        match *self {
            Number::Byte(v) => v as i32,
            Number::Short(v) => v as i32,
            Number::Int(v) => v,
            Number::Long(v) => v as i32,
            Number::Float(v) => v as i32,
            Number::Double(v) => v as i32,
        }
    }

    /// Convert to i16; integers wrap, floats narrow through i32
    pub fn as_i16(&self) -> i16 {
        match *self {
            Number::Byte(v) => v as i16,
            Number::Short(v) => v,
            Number::Int(v) => v as i16,
            Number::Long(v) => v as i16,
            Number::Float(v) => (v as i32) as i16,
            Number::Double(v) => (v as i32) as i16,
        }
    }

    /// Convert to i8; integers wrap, floats narrow through i32
    pub fn as_i8(&self) -> i8 {
        match *self {
            Number::Byte(v) => v,
            Number::Short(v) => v as i8,
            Number::Int(v) => v as i8,
            Number::Long(v) => v as i8,
            Number::Float(v) => (v as i32) as i8,
            Number::Double(v) => (v as i32) as i8,
        }
    }
}

// Floats compare by bit pattern with every NaN equal to every other NaN,
// so equality stays reflexive.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Byte(a), Number::Byte(b)) => a == b,
            (Number::Short(a), Number::Short(b)) => a == b,
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Long(a), Number::Long(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => {
                (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
            }
            (Number::Double(a), Number::Double(b)) => {
                (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Byte(v) => write!(f, "{}", v),
            Number::Short(v) => write!(f, "{}", v),
            Number::Int(v) => write!(f, "{}", v),
            Number::Long(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
            Number::Double(v) => write!(f, "{}", v),
        }
    }
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Operand {
    Null,
    Bool(bool),
    Number(Number),
    Str(String),
    Type(TypeDescriptor),
}

impl Operand {
    pub fn is_null(&self) -> bool {
        matches!(self, Operand::Null)
    }

    /// The number, if this operand is numeric
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Operand::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The type descriptor, if this operand is one
    pub fn as_type(&self) -> Option<&TypeDescriptor> {
        match self {
            Operand::Type(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Null => write!(f, "null"),
            Operand::Bool(b) => write!(f, "{}", b),
            Operand::Number(n) => write!(f, "{}", n),
            Operand::Str(s) => write!(f, "'{}'", s),
            Operand::Type(t) => write!(f, "type {}", t),
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Number::$variant(v)
                }
            }

            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Operand::Number(Number::$variant(v))
                }
            }
        )*
    };
}

impl_from_number!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
);

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::Number(n)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Str(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Str(s)
    }
}

impl From<TypeDescriptor> for Operand {
    fn from(t: TypeDescriptor) -> Self {
        Operand::Type(t)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Operand::Null)
    }
}

impl TryFrom<Value> for Operand {
    type Error = ComparisonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Operand::Null),
            Value::Bool(b) => Ok(Operand::Bool(b)),
            Value::String(s) => Ok(Operand::Str(s)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i32::try_from(i)
                        .map(Operand::from)
                        .unwrap_or(Operand::from(i)))
                } else {
                    n.as_f64()
                        .map(Operand::from)
                        .ok_or_else(|| ComparisonError::UnsupportedValue(n.to_string()))
                }
            }
            other @ (Value::Array(_) | Value::Object(_)) => {
                Err(ComparisonError::UnsupportedValue(other.to_string()))
            }
        }
    }
}
