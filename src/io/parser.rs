//! Parser for the textual sparse matrix format
//!
//! ```text
//! rows=<N>
//! cols=<M>
//! (row, col, value)
//! ...
//! ```
//!
//! The two header lines are mandatory and come first. Every following
//! non-blank line must be an entry; blank lines are skipped. Zero values are
//! accepted and simply not stored. A leading byte order mark is ignored.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::matrix::{Scalar, SparseMatrix};

lazy_static! {
    static ref ROWS_HEADER: Regex = Regex::new(r"^rows\s*=\s*(\d+)$").unwrap();
    static ref COLS_HEADER: Regex = Regex::new(r"^cols\s*=\s*(\d+)$").unwrap();
    static ref ENTRY: Regex =
        Regex::new(r"^\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(-?\d+)\s*\)$").unwrap();
}

/// Options controlling how strictly input is validated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject entries whose coordinates fall outside the declared shape
    pub check_bounds: bool,
}

/// What was wrong with a malformed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input ended before the named header line
    MissingHeader(&'static str),
    /// A header line did not have the form `<name>=<integer>`
    InvalidHeader { expected: &'static str, found: String },
    /// An entry line did not have the form `(row, col, value)`
    InvalidEntry(String),
    /// A number was well-formed but does not fit its target type
    ValueOutOfRange(String),
    /// An entry lies outside the declared shape (only with `check_bounds`)
    OutOfBounds {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },
}

/// Malformed input; parsing stops at the first offending line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn new(line_index: usize, kind: ParseErrorKind) -> Self {
        Self {
            line: line_index + 1,
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input file has wrong format (line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::MissingHeader(name) => write!(f, "missing `{}=` header", name)?,
            ParseErrorKind::InvalidHeader { expected, found } => {
                write!(f, "expected `{}=<integer>`, found `{}`", expected, found)?
            }
            ParseErrorKind::InvalidEntry(line) => {
                write!(f, "expected `(row, col, value)`, found `{}`", line)?
            }
            ParseErrorKind::ValueOutOfRange(token) => {
                write!(f, "number `{}` is out of range", token)?
            }
            ParseErrorKind::OutOfBounds { row, col, shape } => write!(
                f,
                "entry ({}, {}) outside {}x{} matrix",
                row, col, shape.0, shape.1
            )?,
        }
        write!(f, ")")
    }
}

impl std::error::Error for ParseError {}

/// Parses a matrix without bounds validation
pub fn parse<T: Scalar>(text: &str) -> Result<SparseMatrix<T>, ParseError> {
    parse_with(text, ParseOptions::default())
}

/// Parses a matrix with the given options
pub fn parse_with<T: Scalar>(
    text: &str,
    options: ParseOptions,
) -> Result<SparseMatrix<T>, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n').map(str::trim).enumerate();

    let n_rows = parse_header(lines.next(), 0, "rows", &ROWS_HEADER)?;
    let n_cols = parse_header(lines.next(), 1, "cols", &COLS_HEADER)?;

    let mut matrix = SparseMatrix::new(n_rows, n_cols);

    for (index, line) in lines {
        if line.is_empty() {
            continue;
        }

        let caps = ENTRY
            .captures(line)
            .ok_or_else(|| ParseError::new(index, ParseErrorKind::InvalidEntry(line.to_string())))?;

        let row: usize = parse_number(&caps[1], index)?;
        let col: usize = parse_number(&caps[2], index)?;
        let value: T = parse_number(&caps[3], index)?;

        if options.check_bounds {
            matrix.set_checked(row, col, value).map_err(|_| {
                ParseError::new(
                    index,
                    ParseErrorKind::OutOfBounds {
                        row,
                        col,
                        shape: (n_rows, n_cols),
                    },
                )
            })?;
        } else {
            matrix.set(row, col, value);
        }
    }

    Ok(matrix)
}

fn parse_header(
    line: Option<(usize, &str)>,
    index: usize,
    name: &'static str,
    pattern: &Regex,
) -> Result<usize, ParseError> {
    let line = match line {
        Some((_, line)) if !line.is_empty() => line,
        _ => return Err(ParseError::new(index, ParseErrorKind::MissingHeader(name))),
    };

    let caps = pattern.captures(line).ok_or_else(|| {
        ParseError::new(
            index,
            ParseErrorKind::InvalidHeader {
                expected: name,
                found: line.to_string(),
            },
        )
    })?;

    parse_number(&caps[1], index)
}

fn parse_number<N: FromStr>(token: &str, index: usize) -> Result<N, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::new(index, ParseErrorKind::ValueOutOfRange(token.to_string())))
}

impl<T: Scalar> FromStr for SparseMatrix<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
