//! Codecs for the three external graph representations.
//!
//! Each codec is a pair of free functions, `encode` and `decode`, that
//! translate between a [`GraphSnapshot`] and one on-disk representation:
//!
//! - [`record`]: the structured JSON record, lossless for labels
//! - [`list`]: line-oriented adjacency lists, weighted and unweighted
//! - [`matrix`]: the fixed-width adjacency matrix with a no-edge sentinel
//!
//! Encoding is total. Decoding returns raw, structurally sound snapshots;
//! config-dependent normalization (dedup, weight policy) happens in the
//! canonicalizer, which the conversion facade applies after every decode.
//! The one exception is the adjacency-list decoder, which deduplicates
//! inline because its undirected encoding intentionally mirrors every edge
//! into both endpoint lines.
//!
//! [`GraphSnapshot`]: crate::types::GraphSnapshot

use thiserror::Error;

pub mod list;
pub mod matrix;
pub mod record;

/// Why text input could not be decoded at all.
///
/// These are fatal: the input as a whole does not match the declared
/// grammar, so no partial result is produced. Recoverable per-line trouble
/// in adjacency lists is [`list::ParseError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input bytes are not valid UTF-8 text.
    #[error("input is not valid UTF-8 text")]
    NotUtf8,
    /// The input has no content lines at all.
    #[error("missing header line with the node count")]
    MissingHeader,
    /// The header token is not a positive integer.
    #[error("header {token:?} is not a positive node count")]
    BadHeader {
        /// The offending first token of the header line.
        token: String,
    },
    /// The matrix has fewer data rows than its header declares.
    #[error("matrix declares {expected} node(s) but only {found} row(s) follow")]
    TruncatedMatrix {
        /// Node count declared in the header.
        expected: usize,
        /// Data rows actually present.
        found: usize,
    },
    /// A matrix row has the wrong number of tokens.
    #[error("matrix row {row} has {found} token(s), expected {expected}")]
    RowWidth {
        /// 1-indexed row within the matrix body.
        row: usize,
        /// Expected token count (the declared node count).
        expected: usize,
        /// Token count actually found.
        found: usize,
    },
    /// A matrix cell is not a representable cell value.
    #[error("matrix cell at row {row}, column {column} is invalid: {token:?}")]
    BadCell {
        /// 1-indexed row within the matrix body.
        row: usize,
        /// 1-indexed column within the row.
        column: usize,
        /// The offending token.
        token: String,
    },
    /// Every line and token was malformed; there is nothing to import.
    #[error("no usable data: all {skipped} entries were malformed")]
    NoUsableData {
        /// How many lines and tokens were skipped before giving up.
        skipped: usize,
    },
}

/// Trimmed, non-blank lines paired with their 1-based physical line number.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse a header line into a declared node count.
///
/// Only the first whitespace-separated token is read; trailing text on the
/// header line is ignored. Zero and non-numeric tokens are rejected.
pub(crate) fn parse_header(line: &str) -> Result<usize, FormatError> {
    let token = line.split_whitespace().next().unwrap_or_default();
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FormatError::BadHeader {
            token: token.to_string(),
        }),
    }
}
