//! # SentencePiece `.vocab` IO
//!
//! Lines are:
//! ```terminaloutput
//! {PIECE}\t{SCORE}
//! ```
//!
//! The line number is the piece index. The score column is optional.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    alloc::{format, vec::Vec},
    errors::{WMError, WMResult},
    vocab::{PieceEntry, PieceMapVocab},
};

/// Load a [`PieceMapVocab`] from a `.vocab` file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_piece_vocab_path<P: AsRef<Path>>(path: P) -> WMResult<PieceMapVocab> {
    let reader = BufReader::new(File::open(path)?);
    read_piece_vocab(reader)
}

/// Read a [`PieceMapVocab`] from a `.vocab` line reader.
///
/// Blank lines are skipped and do not consume an index.
pub fn read_piece_vocab<R: BufRead>(reader: R) -> WMResult<PieceMapVocab> {
    let mut entries = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let (piece, score) = match line.split_once('\t') {
            Some((piece, score)) => {
                let score = score.trim().parse::<f32>().map_err(|e| {
                    WMError::Parse(format!("line {}: bad score {score:?}: {e}", lineno + 1))
                })?;
                (piece, score)
            }
            None => (line, 0.0),
        };

        entries.push(PieceEntry::new(piece, score));
    }

    log::debug!("read {} pieces", entries.len());
    PieceMapVocab::from_entries(entries)
}

/// Save a [`PieceMapVocab`] to a `.vocab` file.
///
/// The vocabulary is checked before the file is created.
pub fn save_piece_vocab_path<P: AsRef<Path>>(
    vocab: &PieceMapVocab,
    path: P,
) -> WMResult<()> {
    check_writable(vocab)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_piece_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`PieceMapVocab`] in `.vocab` format.
///
/// ## Errors
/// * [`WMError::VocabConflict`] if a piece contains a tab or line break,
///   which the format cannot represent. Nothing is written in that case.
pub fn write_piece_vocab<W: Write>(
    vocab: &PieceMapVocab,
    writer: &mut W,
) -> WMResult<()> {
    check_writable(vocab)?;
    for entry in vocab.entries() {
        writeln!(writer, "{}\t{}", entry.piece, entry.score)?;
    }
    Ok(())
}

fn check_writable(vocab: &PieceMapVocab) -> WMResult<()> {
    match vocab
        .entries()
        .iter()
        .position(|e| e.piece.contains(['\t', '\n', '\r']))
    {
        Some(idx) => Err(WMError::VocabConflict(format!(
            "piece {idx} ({:?}) cannot be written to a .vocab file",
            vocab.entries()[idx].piece
        ))),
        None => Ok(()),
    }
}
