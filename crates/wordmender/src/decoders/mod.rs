//! # Batch Decoders
//!
//! Decoder clients should use:
//!
//! * [`BatchDecoder`] - decodes `(batch_size, sequence_length)` token batches.
//! * [`BatchDecoderOptions`] - configures and builds a [`BatchDecoder`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wordmender::batch::TokenBatch;
//! use wordmender::decoders::BatchDecoderOptions;
//! use wordmender::vocab::PieceMapVocab;
//!
//! let vocab = PieceMapVocab::from_pieces(&["<unk>", "<s>", "</s>", "\u{2581}He", "llo"]).unwrap();
//! let decoder = BatchDecoderOptions::default().build(Arc::new(vocab));
//!
//! let batch = TokenBatch::from_rows(&[vec![1i64, 3, 4, 2], vec![3, 4, 2, 2]]).unwrap();
//! assert_eq!(decoder.decode(&batch).unwrap(), ["Hello", "Hello"]);
//! ```

pub mod batch_decoder;
pub mod decoder_options;

#[doc(inline)]
pub use batch_decoder::BatchDecoder;
#[doc(inline)]
pub use decoder_options::BatchDecoderOptions;
