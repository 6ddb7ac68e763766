//! # Batch Decoder

use crate::{
    alloc::{format, string::String, sync::Arc, vec::Vec},
    batch::{BatchStorage, TokenBatch},
    data::Data,
    decoders::BatchDecoderOptions,
    errors::{WMError, WMResult},
    types::TokenIdType,
    vocab::PieceVocab,
};

/// Decodes `(batch_size, sequence_length)` token batches into strings.
///
/// Each row is looked up and merged independently; rows are fanned out
/// over ``rayon`` when the feature is enabled and
/// [`BatchDecoderOptions::parallel`] is set.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `decoder`.
#[derive(Clone)]
pub struct BatchDecoder<V: PieceVocab> {
    vocab: Arc<V>,
    options: BatchDecoderOptions,
}

impl<V: PieceVocab> BatchDecoder<V> {
    /// Create a decoder with the default options.
    pub fn new(vocab: Arc<V>) -> Self {
        Self::with_options(vocab, BatchDecoderOptions::default())
    }

    /// Create a decoder with the given options.
    pub fn with_options(
        vocab: Arc<V>,
        options: BatchDecoderOptions,
    ) -> Self {
        Self { vocab, options }
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<V> {
        &self.vocab
    }

    /// The options.
    pub fn options(&self) -> &BatchDecoderOptions {
        &self.options
    }

    /// Decode a pipeline value.
    ///
    /// A [`Data::Batch`] yields a [`Data::List`] of [`Data::String`];
    /// any other value fails with [`WMError::InvalidArgument`].
    pub fn decode_data(
        &self,
        data: Data,
    ) -> WMResult<Data> {
        match data {
            Data::Batch(batch) => Ok(Data::List(
                self.decode(&batch)?.into_iter().map(Data::String).collect(),
            )),
            other => Err(WMError::InvalidArgument(format!(
                "the batch decoder expects as input a token batch, got {}",
                other.kind_name()
            ))),
        }
    }

    /// Decode every row of a batch.
    ///
    /// ## Arguments
    /// * `batch` - a two-dimensional batch of `i16`, `i32`, or `i64` ids.
    ///
    /// ## Returns
    /// One string per row, in row order.
    ///
    /// ## Errors
    /// * [`WMError::InvalidArgument`] if the batch is not two-dimensional.
    /// * [`WMError::NotSupported`] for other element types.
    /// * The first lookup or merge failure of the vocabulary, unchanged.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn decode(
        &self,
        batch: &TokenBatch,
    ) -> WMResult<Vec<String>> {
        let &[batch_size, seq_len] = batch.shape() else {
            return Err(WMError::InvalidArgument(format!(
                "the batch decoder expects a two-dimensional batch, got shape {:?}",
                batch.shape()
            )));
        };

        let dtype = batch.dtype();
        if !dtype.is_token_id_type() {
            return Err(WMError::NotSupported { dtype });
        }

        let batch = batch.to_host();

        log::debug!("decoding {batch_size}x{seq_len} {dtype} batch");

        match batch.storage() {
            BatchStorage::I16(data) => self.decode_rows(data, batch_size, seq_len),
            BatchStorage::I32(data) => self.decode_rows(data, batch_size, seq_len),
            BatchStorage::I64(data) => self.decode_rows(data, batch_size, seq_len),
            other => Err(WMError::NotSupported {
                dtype: other.dtype(),
            }),
        }
    }

    /// Decode `batch_size` rows of `seq_len` ids, each into its own slot.
    fn decode_rows<T: TokenIdType>(
        &self,
        data: &[T],
        batch_size: usize,
        seq_len: usize,
    ) -> WMResult<Vec<String>> {
        let mut output: Vec<String> = Vec::new();
        output.try_reserve_exact(batch_size).map_err(|e| {
            WMError::InvalidArgument(format!("cannot allocate output for {batch_size} rows: {e}"))
        })?;
        output.resize(batch_size, String::new());

        let decode_slot = |(idx, slot): (usize, &mut String)| -> WMResult<()> {
            let row = &data[idx * seq_len..(idx + 1) * seq_len];
            *slot = self.decode_row(row)?;
            Ok(())
        };

        #[cfg(feature = "rayon")]
        if self.options.parallel {
            use rayon::prelude::*;

            let min_len = self.options.min_rows_per_task.map_or(1, |n| n.get());
            output
                .par_iter_mut()
                .enumerate()
                .with_min_len(min_len)
                .try_for_each(decode_slot)?;

            return Ok(output);
        }

        output.iter_mut().enumerate().try_for_each(decode_slot)?;

        Ok(output)
    }

    /// Look up each id of a row, then merge the row's tokens.
    fn decode_row<T: TokenIdType>(
        &self,
        row: &[T],
    ) -> WMResult<String> {
        let row = match self.options.pad_index {
            Some(pad) => {
                let pad = i64::from(pad);
                let end = row
                    .iter()
                    .position(|id| id.to_i64() == Some(pad))
                    .unwrap_or(row.len());
                &row[..end]
            }
            None => row,
        };

        let mut tokens: Vec<&str> = Vec::with_capacity(row.len());
        for &id in row {
            tokens.push(self.vocab.index_to_token(id.to_vocab_index()?)?);
        }

        self.vocab.merge(&tokens)
    }
}
