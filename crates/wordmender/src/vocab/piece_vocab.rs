//! # Piece Vocabulary Trait

use crate::{alloc::string::String, errors::WMResult, types::VocabIndex};

/// The lookup and merge surface a decoder needs from a vocabulary.
///
/// Implementations are shared read-only across decode threads.
pub trait PieceVocab: Send + Sync {
    /// The number of pieces in the vocabulary.
    fn len(&self) -> usize;

    /// Is the vocabulary empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the display token for an index.
    ///
    /// ## Arguments
    /// * `index` - the vocabulary index.
    ///
    /// ## Returns
    /// A token borrowed from the vocabulary, or an error for indices
    /// outside the vocabulary.
    fn index_to_token(
        &self,
        index: VocabIndex,
    ) -> WMResult<&str>;

    /// Merge a sequence of tokens into one decoded string.
    ///
    /// ## Arguments
    /// * `tokens` - tokens previously returned by [`PieceVocab::index_to_token`].
    fn merge(
        &self,
        tokens: &[&str],
    ) -> WMResult<String>;
}
