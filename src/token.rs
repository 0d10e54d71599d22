use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A single unit of the encoded-tree wire format.
///
/// The grammar is `-?[0-9]+` for [`Token::Num`] and the literal `null` for [`Token::Null`];
/// surrounding whitespace per token is ignored. Anything else is a
/// [malformed token](crate::Error::MalformedToken).
///
/// ```rust
/// use judgeio::Token;
///
/// assert_eq!(" -42 ".parse::<Token>().unwrap(), Token::Num(-42));
/// assert_eq!("null".parse::<Token>().unwrap(), Token::Null);
/// assert!("4x2".parse::<Token>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// An integer value; on the wire, its base-10 representation.
    Num(i64),
    /// The explicit placeholder for an absent node, written as `null`.
    Null,
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "null" {
            return Ok(Token::Null);
        }
        s.parse::<i64>()
            .map(Token::Num)
            .map_err(|_| Error::MalformedToken(s.to_owned()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Token::Num(n) => n.fmt(f),
            Token::Null => f.write_str("null"),
        }
    }
}

/// Split an encoded line on commas, without trimming the pieces.
///
/// Exists instead of `str::split` so the comma scan can go through [`fast_find`].
pub(crate) fn split_commas(line: &str) -> SplitCommas<'_> {
    SplitCommas { rest: Some(line) }
}

pub(crate) struct SplitCommas<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for SplitCommas<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match fast_find(rest.as_bytes()) {
            Some(pos) => {
                self.rest = Some(&rest[pos + 1..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// Parse a whole encoded line into its token sequence.
///
/// The line must be non-empty; the empty-input and bare-`null` cases are handled by the codecs
/// before tokens are ever materialized.
pub(crate) fn parse_tokens(line: &str) -> Result<Vec<Token>, Error> {
    split_commas(line).map(str::parse).collect()
}

/// Parse a line of whitespace-separated integers, as used for `int[]` inputs and linked lists.
pub(crate) fn parse_int_row(line: &str) -> Result<Vec<i64>, Error> {
    line.split_whitespace()
        .map(|word| {
            word.parse::<i64>()
                .map_err(|_| Error::MalformedToken(word.to_owned()))
        })
        .collect()
}

#[inline]
fn fast_find(haystack: &[u8]) -> Option<usize> {
    #[cfg(feature = "memchr")]
    return memchr::memchr(b',', haystack);

    #[cfg(not(feature = "memchr"))]
    return haystack.iter().position(|&b| b == b',');
}

#[test]
fn test_split_commas_keeps_empty_pieces() {
    let pieces: Vec<&str> = split_commas("1,,2").collect();
    assert_eq!(pieces, &["1", "", "2"]);
}

#[test]
fn test_split_commas_single_piece() {
    let pieces: Vec<&str> = split_commas("17").collect();
    assert_eq!(pieces, &["17"]);
}

#[test]
fn test_token_roundtrip_display() {
    for raw in &["-1", "0", "9223372036854775807", "null"] {
        let token: Token = raw.parse().unwrap();
        assert_eq!(token.to_string(), *raw);
    }
}
