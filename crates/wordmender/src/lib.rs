//! # `wordmender` Batch Detokenizer
//!
//! Turns batches of LLM token ids back into text.
//!
//! Given a `(batch_size, sequence_length)` array of `i16`, `i32`, or `i64`
//! ids, each row is looked up in a SentencePiece-style vocabulary and the
//! row's pieces are merged into one string; rows are decoded in parallel.
//!
//! See:
//! * [`batch`] for the token batch input type.
//! * [`decoders`] to decode batches into strings.
//! * [`vocab`] for the vocabulary trait, piece tables, and `.vocab` io.
//! * [`data`] for the dynamically-typed pipeline value.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Decoding a Batch
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use wordmender::batch::TokenBatch;
//! use wordmender::decoders::BatchDecoder;
//! use wordmender::vocab::io::load_piece_vocab_path;
//!
//! let vocab = Arc::new(load_piece_vocab_path("spm.vocab")?);
//! let decoder = BatchDecoder::new(vocab);
//!
//! let batch = TokenBatch::from_rows(&[vec![17i64, 24, 3], vec![9, 2, 2]])?;
//! for line in decoder.decode(&batch)? {
//!     println!("{line}");
//! }
//! # Ok::<(), wordmender::WMError>(())
//! ```
#![warn(missing_docs, unused)]

extern crate alloc;

pub mod batch;
pub mod data;
pub mod decoders;
pub mod errors;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use batch::{DType, Device, TokenBatch};
#[doc(inline)]
pub use data::Data;
#[doc(inline)]
pub use decoders::{BatchDecoder, BatchDecoderOptions};
#[doc(inline)]
pub use errors::{WMError, WMResult, WordmenderError};
#[doc(inline)]
pub use types::{TokenIdType, VocabIndex};
#[doc(inline)]
pub use vocab::{PieceMapVocab, PieceVocab};
