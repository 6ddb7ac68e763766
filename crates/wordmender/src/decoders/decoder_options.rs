//! Batch Decoder Options
//!
//! Options for building a [`BatchDecoder`].

use core::num::NonZeroUsize;

use crate::{
    alloc::sync::Arc,
    decoders::BatchDecoder,
    types::VocabIndex,
    vocab::PieceVocab,
};

/// Options for configuring a [`BatchDecoder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchDecoderOptions {
    /// Should rows be decoded in parallel?
    ///
    /// Only honored when the ``rayon`` feature is enabled;
    /// output is identical either way.
    pub parallel: bool,

    /// The minimum number of rows handed to one parallel task.
    pub min_rows_per_task: Option<NonZeroUsize>,

    /// Rows are cut at the first occurrence of this id.
    pub pad_index: Option<VocabIndex>,
}

impl Default for BatchDecoderOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            min_rows_per_task: None,
            pad_index: None,
        }
    }
}

impl BatchDecoderOptions {
    /// Gets the configured parallelism value.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Gets the parallel grain size.
    pub fn min_rows_per_task(&self) -> Option<NonZeroUsize> {
        self.min_rows_per_task
    }

    /// Sets the parallel grain size.
    pub fn set_min_rows_per_task(
        &mut self,
        min_rows_per_task: Option<NonZeroUsize>,
    ) {
        self.min_rows_per_task = min_rows_per_task;
    }

    /// Sets the parallel grain size.
    pub fn with_min_rows_per_task(
        mut self,
        min_rows_per_task: Option<NonZeroUsize>,
    ) -> Self {
        self.set_min_rows_per_task(min_rows_per_task);
        self
    }

    /// Gets the padding id.
    pub fn pad_index(&self) -> Option<VocabIndex> {
        self.pad_index
    }

    /// Sets the padding id.
    ///
    /// When set, each row is truncated before its first padding id.
    pub fn set_pad_index(
        &mut self,
        pad_index: Option<VocabIndex>,
    ) {
        self.pad_index = pad_index;
    }

    /// Sets the padding id.
    ///
    /// When set, each row is truncated before its first padding id.
    pub fn with_pad_index(
        mut self,
        pad_index: Option<VocabIndex>,
    ) -> Self {
        self.set_pad_index(pad_index);
        self
    }

    /// Build a [`BatchDecoder`] for the given vocab.
    pub fn build<V: PieceVocab>(
        &self,
        vocab: Arc<V>,
    ) -> BatchDecoder<V> {
        BatchDecoder::with_options(vocab, *self)
    }
}
