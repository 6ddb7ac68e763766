//! # Piece Kinds

/// The role of a piece in a SentencePiece-style vocabulary.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum PieceKind {
    /// An ordinary subword piece.
    #[default]
    Normal,

    /// The unknown-token piece.
    Unknown,

    /// A control piece (`<s>`, `</s>`, `<pad>`); renders as nothing.
    Control,

    /// A user-defined piece; rendered verbatim.
    UserDefined,

    /// A byte-fallback piece (`<0xNN>`).
    Byte,
}

impl PieceKind {
    /// Infer the kind of a piece from its surface.
    pub fn infer(piece: &str) -> Self {
        match piece {
            "<unk>" => Self::Unknown,
            "<s>" | "</s>" | "<pad>" => Self::Control,
            _ if parse_byte_piece(piece).is_some() => Self::Byte,
            _ => Self::Normal,
        }
    }
}

/// Parse a `<0xNN>` byte-fallback piece.
pub fn parse_byte_piece(piece: &str) -> Option<u8> {
    let hex = piece.strip_prefix("<0x")?.strip_suffix('>')?;
    if hex.len() != 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}
