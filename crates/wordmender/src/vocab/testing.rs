//! # Vocab Testing Tools

use crate::vocab::PieceMapVocab;

/// The pieces of [`build_test_vocab`], in index order.
pub const TEST_PIECES: &[&str] = &[
    "<unk>",
    "<s>",
    "</s>",
    "<pad>",
    "\u{2581}",
    "\u{2581}He",
    "\u{2581}world",
    "\u{2581}the",
    "\u{2581}a",
    "llo",
    "\u{2581}salt",
    "\u{2581}heat",
    ",",
    "'",
    "s",
    "\u{2581}it",
    "\u{2581}not",
    "<0xC3>",
    "<0xA9>",
    "<0xE4>",
    "<0xB8>",
    "<0x96>",
    "\u{2581}caf",
    ".",
];

/// Create a small test [`PieceMapVocab`].
///
/// Index `5` is `▁He` and index `9` is `llo`, so `[5, 9]` decodes to `"Hello"`.
pub fn build_test_vocab() -> PieceMapVocab {
    PieceMapVocab::from_pieces(TEST_PIECES).unwrap()
}
