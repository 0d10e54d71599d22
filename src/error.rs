use std::fmt;
use std::io;

use crate::never::Never;

/// All errors this crate can surface while decoding input or printing results.
///
/// The type is parameterized over the error of the underlying [`crate::Reader`], so that decoding
/// from an in-memory string (`E = `[`Never`]) statically cannot fail with an I/O error.
///
/// A malformed input never produces a partial result: the operation that hit the bad token is
/// aborted wholesale and the error is handed to the caller.
#[derive(Debug)]
pub enum Error<E = Never> {
    /// A token that is neither a base-10 integer literal nor the literal `null`.
    MalformedToken(String),
    /// The input ended while another line was still expected.
    UnexpectedEnd,
    /// A fixed-width row (e.g. an adjacency matrix row) had the wrong number of values.
    RowLength {
        /// How many values the row should have had.
        expected: usize,
        /// How many values were actually present.
        got: usize,
    },
    /// The underlying reader failed.
    Read(E),
    /// Writing a result to the output failed.
    Write(io::Error),
}

impl<E> Error<E> {
    /// A stable `kebab-case` code identifying the error condition, independent of its payload.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match *self {
            Error::MalformedToken(_) => "malformed-token",
            Error::UnexpectedEnd => "unexpected-end-of-input",
            Error::RowLength { .. } => "bad-row-length",
            Error::Read(_) => "read-failed",
            Error::Write(_) => "write-failed",
        }
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::MalformedToken(ref token) => write!(f, "malformed-token: {:?}", token),
            Error::UnexpectedEnd => f.write_str("unexpected-end-of-input"),
            Error::RowLength { expected, got } => {
                write!(f, "bad-row-length: expected {} values, got {}", expected, got)
            }
            Error::Read(ref e) => write!(f, "read-failed: {}", e),
            Error::Write(ref e) => write!(f, "write-failed: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Read(ref e) => Some(e),
            Error::Write(ref e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<io::Error> for Error<E> {
    fn from(e: io::Error) -> Self {
        Error::Write(e)
    }
}

impl<E> Error<E> {
    /// Re-wrap a parse error reported against one reader type for use with another.
    ///
    /// Parse failures carry no reader error, so this is only ever a variant conversion; it is
    /// needed when a codec that parses pure strings (and therefore reports `Error<Never>`) is
    /// called from a context whose reader is fallible.
    pub(crate) fn lift(err: Error<Never>) -> Error<E> {
        match err {
            Error::MalformedToken(token) => Error::MalformedToken(token),
            Error::UnexpectedEnd => Error::UnexpectedEnd,
            Error::RowLength { expected, got } => Error::RowLength { expected, got },
            Error::Write(e) => Error::Write(e),
            Error::Read(never) => match never {},
        }
    }
}
