//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{PrimInt, Signed, ToPrimitive};

use crate::{
    batch::DType,
    errors::{WMError, WMResult},
};

/// The native index type of a [`crate::vocab::PieceVocab`].
pub type VocabIndex = i32;

/// A type that can be stored in a [`crate::batch::TokenBatch`] as a token id.
///
/// These are constrained to be signed primitive integers,
/// which are narrowed to [`VocabIndex`] before lookup.
pub trait TokenIdType:
    'static + PrimInt + Signed + ToPrimitive + Hash + Default + Debug + Display + Send + Sync
{
    /// The [`DType`] tag of batches holding this type.
    const DTYPE: DType;

    /// Narrow this id to a [`VocabIndex`].
    ///
    /// The conversion is value-preserving; ids which do not fit
    /// fail with [`WMError::TokenOutOfRange`].
    fn to_vocab_index(self) -> WMResult<VocabIndex> {
        self.to_i32().ok_or_else(|| WMError::TokenOutOfRange {
            index: self.to_i64().unwrap_or(i64::MAX),
        })
    }
}

impl TokenIdType for i16 {
    const DTYPE: DType = DType::I16;
}

impl TokenIdType for i32 {
    const DTYPE: DType = DType::I32;
}

impl TokenIdType for i64 {
    const DTYPE: DType = DType::I64;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WMHashMap<K, V> {
            WMHashMap::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WMHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WMHashMap<K, V> {
            WMHashMap::with_capacity(capacity)
        }
    }
}
