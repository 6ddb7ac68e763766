//! # Piece Map Vocabulary

use crate::{
    alloc::{format, string::String, vec::Vec},
    errors::{WMError, WMResult},
    types::{VocabIndex, WMHashMap, hash_map_with_capacity},
    vocab::{MergeRules, PieceKind, PieceVocab},
};

/// One entry of a [`PieceMapVocab`].
#[derive(Debug, Clone, PartialEq)]
pub struct PieceEntry {
    /// The piece surface.
    pub piece: String,

    /// The piece role.
    pub kind: PieceKind,

    /// The model score of the piece.
    pub score: f32,
}

impl PieceEntry {
    /// Build an entry, inferring its kind from the surface.
    pub fn new<S: Into<String>>(
        piece: S,
        score: f32,
    ) -> Self {
        let piece = piece.into();
        Self {
            kind: PieceKind::infer(&piece),
            piece,
            score,
        }
    }

    /// Override the inferred kind.
    pub fn with_kind(
        mut self,
        kind: PieceKind,
    ) -> Self {
        self.kind = kind;
        self
    }
}

/// An ordered `{ index -> piece }` table with SentencePiece merge rules.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `vocab`.
#[derive(Debug, Clone)]
pub struct PieceMapVocab {
    entries: Vec<PieceEntry>,
    index: WMHashMap<String, VocabIndex>,
    rules: MergeRules,
}

impl PieceMapVocab {
    /// Build a vocabulary from piece surfaces, in index order.
    ///
    /// Kinds are inferred; scores are zero.
    pub fn from_pieces<S: AsRef<str>>(pieces: &[S]) -> WMResult<Self> {
        Self::from_entries(
            pieces
                .iter()
                .map(|p| PieceEntry::new(p.as_ref(), 0.0))
                .collect(),
        )
    }

    /// Build a vocabulary from entries, in index order.
    ///
    /// ## Errors
    /// * [`WMError::VocabConflict`] on duplicate pieces, or more pieces
    ///   than [`VocabIndex`] can address.
    pub fn from_entries(entries: Vec<PieceEntry>) -> WMResult<Self> {
        if entries.len() > VocabIndex::MAX as usize {
            return Err(WMError::VocabConflict(format!(
                "{} pieces exceed the index space",
                entries.len()
            )));
        }

        let mut index = hash_map_with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if let Some(prev) = index.insert(entry.piece.clone(), idx as VocabIndex) {
                return Err(WMError::VocabConflict(format!(
                    "piece {:?} appears at both {prev} and {idx}",
                    entry.piece
                )));
            }
        }

        log::debug!("built piece vocab with {} pieces", entries.len());

        Ok(Self {
            entries,
            index,
            rules: MergeRules::default(),
        })
    }

    /// Replace the merge rules.
    pub fn with_rules(
        mut self,
        rules: MergeRules,
    ) -> Self {
        self.rules = rules;
        self
    }

    /// The merge rules.
    pub fn rules(&self) -> &MergeRules {
        &self.rules
    }

    /// The entries, in index order.
    pub fn entries(&self) -> &[PieceEntry] {
        &self.entries
    }

    /// Look up the entry for an index.
    pub fn entry(
        &self,
        index: VocabIndex,
    ) -> WMResult<&PieceEntry> {
        usize::try_from(index)
            .ok()
            .and_then(|idx| self.entries.get(idx))
            .ok_or(WMError::TokenOutOfRange {
                index: index.into(),
            })
    }

    /// Look up the index of a piece.
    pub fn piece_to_index(
        &self,
        piece: &str,
    ) -> Option<VocabIndex> {
        self.index.get(piece).copied()
    }

    /// The kind of the piece at `index`.
    pub fn piece_kind(
        &self,
        index: VocabIndex,
    ) -> WMResult<PieceKind> {
        self.entry(index).map(|e| e.kind)
    }

    /// Classify a token surface; surfaces outside the table are [`PieceKind::Normal`].
    fn kind_of(
        &self,
        token: &str,
    ) -> PieceKind {
        self.piece_to_index(token)
            .map_or(PieceKind::Normal, |idx| self.entries[idx as usize].kind)
    }
}

impl PieceVocab for PieceMapVocab {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn index_to_token(
        &self,
        index: VocabIndex,
    ) -> WMResult<&str> {
        self.entry(index).map(|e| e.piece.as_str())
    }

    fn merge(
        &self,
        tokens: &[&str],
    ) -> WMResult<String> {
        Ok(self.rules.merge(tokens, |t| self.kind_of(t)))
    }
}
