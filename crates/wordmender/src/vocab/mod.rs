//! # Piece Vocabularies
//!
//! Decoders talk to vocabularies through the [`PieceVocab`] trait:
//! * [`PieceVocab::index_to_token`] - index to display token;
//! * [`PieceVocab::merge`] - tokens to decoded text.
//!
//! [`PieceMapVocab`] is a SentencePiece-style implementation, with
//! [`MergeRules`] for whitespace reinsertion and byte-fallback recomposition.
//!
//! ## Example
//!
//! ```rust
//! use wordmender::vocab::{PieceMapVocab, PieceVocab};
//!
//! let vocab = PieceMapVocab::from_pieces(&["<unk>", "\u{2581}He", "llo"]).unwrap();
//!
//! let tokens = [vocab.index_to_token(1).unwrap(), vocab.index_to_token(2).unwrap()];
//! assert_eq!(vocab.merge(&tokens).unwrap(), "Hello");
//! ```

#[cfg(feature = "std")]
pub mod io;
pub mod merge_rules;
pub mod piece_kind;
pub mod piece_map_vocab;
pub mod piece_vocab;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use merge_rules::MergeRules;
#[doc(inline)]
pub use piece_kind::PieceKind;
#[doc(inline)]
pub use piece_map_vocab::{PieceEntry, PieceMapVocab};
#[doc(inline)]
pub use piece_vocab::PieceVocab;
