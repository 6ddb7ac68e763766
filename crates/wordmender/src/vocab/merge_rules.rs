//! # SentencePiece Merge Rules
//!
//! Joining pieces back into text:
//! * the word-boundary marker (`▁`) becomes a space;
//! * runs of `<0xNN>` byte pieces are recomposed into UTF-8;
//! * control pieces render as nothing;
//! * unknown pieces render as [`MergeRules::unk_surface`].

use crate::{
    alloc::{
        string::{String, ToString},
        vec::Vec,
    },
    vocab::piece_kind::{PieceKind, parse_byte_piece},
};

/// The SentencePiece word-boundary marker, `U+2581`.
pub const WORD_BOUNDARY: char = '\u{2581}';

/// The default surface of unknown pieces.
pub const DEFAULT_UNK_SURFACE: &str = " \u{2047} ";

/// Rules for merging a row of pieces into one string.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeRules {
    /// The word-boundary marker, replaced by a space.
    pub word_boundary: char,

    /// The text emitted for unknown pieces.
    pub unk_surface: String,

    /// Strip the boundary marker of the first piece.
    pub remove_leading_space: bool,
}

impl Default for MergeRules {
    fn default() -> Self {
        Self {
            word_boundary: WORD_BOUNDARY,
            unk_surface: DEFAULT_UNK_SURFACE.to_string(),
            remove_leading_space: true,
        }
    }
}

impl MergeRules {
    /// Set the word-boundary marker.
    pub fn with_word_boundary(
        mut self,
        word_boundary: char,
    ) -> Self {
        self.word_boundary = word_boundary;
        self
    }

    /// Set the unknown-piece surface.
    pub fn with_unk_surface<S: Into<String>>(
        mut self,
        unk_surface: S,
    ) -> Self {
        self.unk_surface = unk_surface.into();
        self
    }

    /// Set whether the leading boundary marker is stripped.
    pub fn with_remove_leading_space(
        mut self,
        remove_leading_space: bool,
    ) -> Self {
        self.remove_leading_space = remove_leading_space;
        self
    }

    /// Merge `tokens` into one string.
    ///
    /// ## Arguments
    /// * `tokens` - the row's pieces, in order.
    /// * `kind_of` - classifies each piece.
    pub fn merge<F>(
        &self,
        tokens: &[&str],
        kind_of: F,
    ) -> String
    where
        F: Fn(&str) -> PieceKind,
    {
        let mut text = String::with_capacity(tokens.iter().map(|t| t.len()).sum());
        let mut pending: Vec<u8> = Vec::new();

        for &token in tokens {
            let kind = kind_of(token);

            if kind == PieceKind::Byte
                && let Some(byte) = parse_byte_piece(token)
            {
                pending.push(byte);
                continue;
            }
            flush_bytes(&mut pending, &mut text);

            match kind {
                PieceKind::Control => {}
                PieceKind::Unknown => text.push_str(&self.unk_surface),
                PieceKind::UserDefined => text.push_str(token),
                PieceKind::Normal | PieceKind::Byte => {
                    let mut piece = token;
                    if self.remove_leading_space && text.is_empty() {
                        piece = piece.strip_prefix(self.word_boundary).unwrap_or(piece);
                    }
                    for c in piece.chars() {
                        text.push(if c == self.word_boundary { ' ' } else { c });
                    }
                }
            }
        }
        flush_bytes(&mut pending, &mut text);

        text
    }
}

fn flush_bytes(
    pending: &mut Vec<u8>,
    text: &mut String,
) {
    if pending.is_empty() {
        return;
    }
    text.push_str(&String::from_utf8_lossy(pending));
    pending.clear();
}
