//! # Token Batch
//!
//! A minimal dense, row-major, two-dimensional numeric array.
//!
//! The decoder only needs three things from a tensor: the element type tag,
//! the shape, and host-readable storage. [`TokenBatch`] carries exactly that,
//! plus the [`Device`] it resides on.

use crate::{
    alloc::{borrow::Cow, format, vec, vec::Vec},
    batch::{DType, Device},
    errors::{WMError, WMResult},
};

/// Typed, contiguous storage of a [`TokenBatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum BatchStorage {
    /// [`DType::Bool`] storage.
    Bool(Vec<bool>),
    /// [`DType::U8`] storage.
    U8(Vec<u8>),
    /// [`DType::I8`] storage.
    I8(Vec<i8>),
    /// [`DType::I16`] storage.
    I16(Vec<i16>),
    /// [`DType::I32`] storage.
    I32(Vec<i32>),
    /// [`DType::I64`] storage.
    I64(Vec<i64>),
    /// [`DType::F32`] storage.
    F32(Vec<f32>),
    /// [`DType::F64`] storage.
    F64(Vec<f64>),
}

macro_rules! impl_storage_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for BatchStorage {
                fn from(data: Vec<$ty>) -> Self {
                    Self::$variant(data)
                }
            }
        )*
    };
}

impl_storage_from! {
    Bool => bool,
    U8 => u8,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    F32 => f32,
    F64 => f64,
}

/// Decode little-endian `$ty` elements from a byte buffer.
macro_rules! read_le {
    ($bytes:expr, $ty:ty) => {
        $bytes
            .chunks_exact(core::mem::size_of::<$ty>())
            .map(|c| {
                let mut buf = [0u8; core::mem::size_of::<$ty>()];
                buf.copy_from_slice(c);
                <$ty>::from_le_bytes(buf)
            })
            .collect::<Vec<$ty>>()
    };
}

impl BatchStorage {
    /// The element type tag of this storage.
    pub fn dtype(&self) -> DType {
        match self {
            Self::Bool(_) => DType::Bool,
            Self::U8(_) => DType::U8,
            Self::I8(_) => DType::I8,
            Self::I16(_) => DType::I16,
            Self::I32(_) => DType::I32,
            Self::I64(_) => DType::I64,
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::U8(v) => v.len(),
            Self::I8(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
        }
    }

    /// Is the storage empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reinterpret a raw little-endian byte buffer as elements of `dtype`.
    pub fn from_le_bytes(
        dtype: DType,
        bytes: &[u8],
    ) -> WMResult<Self> {
        let width = dtype.size_in_bytes();
        if !bytes.len().is_multiple_of(width) {
            return Err(WMError::Parse(format!(
                "{} bytes is not a whole number of {dtype} elements",
                bytes.len()
            )));
        }

        Ok(match dtype {
            DType::Bool => Self::Bool(bytes.iter().map(|&b| b != 0).collect()),
            DType::U8 => Self::U8(bytes.to_vec()),
            DType::I8 => Self::I8(bytes.iter().map(|&b| b as i8).collect()),
            DType::I16 => Self::I16(read_le!(bytes, i16)),
            DType::I32 => Self::I32(read_le!(bytes, i32)),
            DType::I64 => Self::I64(read_le!(bytes, i64)),
            DType::F32 => Self::F32(read_le!(bytes, f32)),
            DType::F64 => Self::F64(read_le!(bytes, f64)),
        })
    }
}

/// A dense, row-major numeric array of token ids.
///
/// The shape is not restricted to two dimensions at construction;
/// the decoder rejects other ranks when it is handed the batch.
///
/// ## Style Hints
///
/// Instance names should prefer `batch`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBatch {
    shape: Vec<usize>,
    storage: BatchStorage,
    device: Device,
}

impl TokenBatch {
    /// Build a host-resident batch.
    ///
    /// ## Arguments
    /// * `shape` - the array shape; its product must equal the storage length.
    /// * `storage` - the row-major elements.
    pub fn new<S>(
        shape: Vec<usize>,
        storage: S,
    ) -> WMResult<Self>
    where
        S: Into<BatchStorage>,
    {
        let storage = storage.into();
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
            .ok_or_else(|| {
                WMError::InvalidArgument(format!("shape {shape:?} overflows the address space"))
            })?;
        if expected != storage.len() {
            return Err(WMError::ShapeMismatch {
                expected,
                actual: storage.len(),
            });
        }
        Ok(Self {
            shape,
            storage,
            device: Device::Cpu,
        })
    }

    /// Build a `(rows, columns)` batch from equal-length rows.
    ///
    /// An empty row list yields a `(0, 0)` batch.
    pub fn from_rows<E, R>(rows: &[R]) -> WMResult<Self>
    where
        E: Copy,
        R: AsRef<[E]>,
        Vec<E>: Into<BatchStorage>,
    {
        let seq_len = rows.first().map_or(0, |r| r.as_ref().len());

        let mut data = Vec::with_capacity(rows.len() * seq_len);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != seq_len {
                return Err(WMError::InvalidArgument(format!(
                    "ragged batch: row {idx} has {} elements, expected {seq_len}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        Self::new(vec![rows.len(), seq_len], data)
    }

    /// Build a host-resident batch from a raw little-endian byte buffer.
    pub fn from_le_bytes(
        dtype: DType,
        shape: Vec<usize>,
        bytes: &[u8],
    ) -> WMResult<Self> {
        Self::new(shape, BatchStorage::from_le_bytes(dtype, bytes)?)
    }

    /// Mark this batch as residing on `device`.
    pub fn with_device(
        mut self,
        device: Device,
    ) -> Self {
        self.device = device;
        self
    }

    /// The shape of the batch.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// The element type tag.
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// The device the storage resides on.
    pub fn device(&self) -> Device {
        self.device
    }

    /// The row-major storage.
    pub fn storage(&self) -> &BatchStorage {
        &self.storage
    }

    /// A host-resident view of this batch.
    ///
    /// Host batches are borrowed; accelerator batches are copied once.
    pub fn to_host(&self) -> Cow<'_, Self> {
        if self.device.is_host() {
            return Cow::Borrowed(self);
        }

        log::debug!(
            "relocating {:?} {} batch from {} to host",
            self.shape,
            self.dtype(),
            self.device
        );
        Cow::Owned(Self {
            shape: self.shape.clone(),
            storage: self.storage.clone(),
            device: Device::Cpu,
        })
    }
}
