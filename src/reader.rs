use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use crate::never::Never;

/// An object that provides input lines to the decoding layer.
///
/// See [`crate::Input::new`] for more information.
pub trait Reader {
    /// The error returned by this reader.
    type Error: std::error::Error;

    /// Return the next line of input without its line terminator, or `None` at end of input.
    ///
    /// Both `\n` and `\r\n` terminators are accepted and stripped. Per-token whitespace is not
    /// this layer's business; the returned line is otherwise untouched.
    fn read_line(&mut self) -> Result<Option<String>, Self::Error>;
}

/// An object that can be converted into a [`crate::Reader`].
///
/// For example, any utf8-string can be converted into a `StringReader`, such that
/// `Input::new("1,2,3")` and `Input::new(&String::new())` work.
pub trait Readable<'a> {
    /// The reader type to which this type should be converted.
    type Reader: Reader + 'a;

    /// Convert self to some sort of reader.
    fn to_reader(self) -> Self::Reader;
}

impl<'a, R: 'a + Reader> Readable<'a> for R {
    type Reader = Self;

    fn to_reader(self) -> Self::Reader {
        self
    }
}

/// A reader over an in-memory string. Infallible.
///
/// This is what multi-line problem inputs in tests are fed through:
///
/// ```rust
/// use judgeio::{Readable, Reader};
///
/// let mut reader = "1 2 3\n4 5\n".to_reader();
/// assert_eq!(reader.read_line().unwrap().as_deref(), Some("1 2 3"));
/// assert_eq!(reader.read_line().unwrap().as_deref(), Some("4 5"));
/// assert_eq!(reader.read_line().unwrap(), None);
/// ```
pub struct StringReader<'a> {
    input: &'a str,
    done: bool,
}

impl<'a> StringReader<'a> {
    fn new(input: &'a str) -> Self {
        StringReader {
            input,
            done: input.is_empty(),
        }
    }
}

impl<'a> Reader for StringReader<'a> {
    type Error = Never;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        if self.done {
            return Ok(None);
        }
        let line = match self.input.find('\n') {
            Some(pos) => {
                let line = &self.input[..pos];
                self.input = &self.input[pos + 1..];
                // A terminator ends a line rather than separating two, so input ending in a
                // newline does not contain a final empty line.
                if self.input.is_empty() {
                    self.done = true;
                }
                line
            }
            None => {
                self.done = true;
                self.input
            }
        };
        Ok(Some(line.strip_suffix('\r').unwrap_or(line).to_owned()))
    }
}

impl<'a> Readable<'a> for &'a str {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self)
    }
}

impl<'a> Readable<'a> for &'a String {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self)
    }
}

/// An [`IoReader`] can be used to construct an [`crate::Input`] from any type that implements
/// `std::io::Read`.
///
/// Because of trait impl conflicts, `IoReader` needs to be explicitly constructed. The exception
/// to that is `File`, which can be directly passed to `Input::new`.
///
/// ```rust
/// use judgeio::{Input, IoReader};
///
/// let mut input = Input::new(IoReader::new("10 20".as_bytes()));
/// // more realistically: Input::new(IoReader::new(std::io::stdin().lock()))
/// assert_eq!(input.int_row().unwrap(), vec![10, 20]);
/// ```
pub struct IoReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> IoReader<R> {
    /// Construct a new `IoReader` from any type that implements `Read`.
    pub fn new(reader: R) -> Self {
        IoReader {
            reader: BufReader::new(reader),
        }
    }
}

impl<R: Read> Reader for IoReader<R> {
    type Error = io::Error;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl<'a> Readable<'a> for File {
    type Reader = IoReader<File>;

    fn to_reader(self) -> Self::Reader {
        IoReader::new(self)
    }
}
