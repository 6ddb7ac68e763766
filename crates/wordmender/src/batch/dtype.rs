//! # Batch Element Types

/// The element type tag of a [`super::TokenBatch`].
///
/// Only [`DType::I16`], [`DType::I32`], and [`DType::I64`] can be decoded;
/// the remaining types exist so that callers can hand over arbitrary
/// numeric arrays and receive a typed failure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum DType {
    /// Boolean.
    Bool,

    /// Unsigned 8-bit integer.
    U8,

    /// Signed 8-bit integer.
    I8,

    /// Signed 16-bit integer.
    I16,

    /// Signed 32-bit integer.
    I32,

    /// Signed 64-bit integer.
    I64,

    /// 32-bit float.
    F32,

    /// 64-bit float.
    F64,
}

impl DType {
    /// The width of one element, in bytes.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            Self::Bool | Self::U8 | Self::I8 => 1,
            Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::I64 | Self::F64 => 8,
        }
    }

    /// Is this a type the decoder can read token ids from?
    pub fn is_token_id_type(&self) -> bool {
        matches!(self, Self::I16 | Self::I32 | Self::I64)
    }
}
