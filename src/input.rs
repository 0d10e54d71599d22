use std::str::FromStr;

use crate::list::ListNode;
use crate::reader::{Readable, Reader};
use crate::token::parse_int_row;
use crate::{dense, levelorder, Error, TreeNode};

/// Typed, line-oriented access to a problem's input stream.
///
/// Each method consumes exactly as many lines as the corresponding input field of the original
/// boilerplate: one for scalars, rows, trees and lists; `1 + n` for an adjacency list or matrix
/// of `n` vertices. Running out of lines is [`Error::UnexpectedEnd`]; a bad value is
/// [`Error::MalformedToken`] and consumes nothing further.
///
/// ```rust
/// use judgeio::Input;
///
/// let mut input = Input::new("3\n10 20 30\n1,null,2\n");
/// assert_eq!(input.scalar::<usize>().unwrap(), 3);
/// assert_eq!(input.int_row().unwrap(), vec![10, 20, 30]);
/// let tree = input.tree().unwrap().unwrap();
/// assert_eq!(tree.val, 1);
/// ```
pub struct Input<R: Reader> {
    reader: R,
}

impl<R: Reader> Input<R> {
    /// Create a new input layer from some source.
    ///
    /// `source` can be `&str`, `&String` or `File` at the moment, as those are the types for
    /// which [`crate::Readable`] is implemented, plus any [`Reader`] (such as
    /// [`crate::IoReader`] over stdin). You can also implement `Readable` on your own types.
    pub fn new<'a, S: Readable<'a, Reader = R>>(source: S) -> Self {
        Input {
            reader: source.to_reader(),
        }
    }

    fn next_line(&mut self) -> Result<String, Error<R::Error>> {
        match self.reader.read_line().map_err(Error::Read)? {
            Some(line) => Ok(line),
            None => Err(Error::UnexpectedEnd),
        }
    }

    /// Consume one raw line, without its terminator. Used for `string` inputs.
    pub fn line(&mut self) -> Result<String, Error<R::Error>> {
        self.next_line()
    }

    /// Consume one line holding a single value of any `FromStr` type, surrounding whitespace
    /// ignored. Used for `int`-like and `bool` inputs.
    pub fn scalar<T: FromStr>(&mut self) -> Result<T, Error<R::Error>> {
        let line = self.next_line()?;
        let word = line.trim();
        word.parse()
            .map_err(|_| Error::MalformedToken(word.to_owned()))
    }

    /// Consume one line of whitespace-separated integers. Used for `int[]` inputs; an empty
    /// line is an empty row.
    pub fn int_row(&mut self) -> Result<Vec<i64>, Error<R::Error>> {
        let line = self.next_line()?;
        parse_int_row(&line).map_err(Error::lift)
    }

    /// Consume one line holding a level-order encoded binary tree.
    ///
    /// See [`levelorder::decode`] for the wire format; an empty line is the no-tree result.
    pub fn tree(&mut self) -> Result<Option<Box<TreeNode>>, Error<R::Error>> {
        let line = self.next_line()?;
        levelorder::decode(&line).map_err(Error::lift)
    }

    /// Consume one line holding an implicit-index encoded binary tree.
    ///
    /// See [`dense::decode`]; this is a different convention from [`Input::tree`].
    pub fn dense_tree(&mut self) -> Result<Option<Box<TreeNode>>, Error<R::Error>> {
        let line = self.next_line()?;
        dense::decode(&line).map_err(Error::lift)
    }

    /// Consume one line holding a linked list as whitespace-separated integers.
    pub fn list(&mut self) -> Result<Option<Box<ListNode>>, Error<R::Error>> {
        let line = self.next_line()?;
        crate::list::decode(&line).map_err(Error::lift)
    }

    /// Consume an adjacency-list graph: a vertex count `n` on its own line, then `n` lines
    /// each listing that vertex's neighbors. A vertex with no neighbors is an empty line.
    pub fn adjacency_list(&mut self) -> Result<Vec<Vec<usize>>, Error<R::Error>> {
        let vertices: usize = self.scalar()?;
        let mut graph = Vec::with_capacity(vertices);
        for _ in 0..vertices {
            let line = self.next_line()?;
            let neighbors = line
                .split_whitespace()
                .map(|word| {
                    word.parse::<usize>()
                        .map_err(|_| Error::MalformedToken(word.to_owned()))
                })
                .collect::<Result<Vec<usize>, _>>()?;
            graph.push(neighbors);
        }
        Ok(graph)
    }

    /// Consume an adjacency-matrix graph: a vertex count `n` on its own line, then `n` lines
    /// of exactly `n` integers each.
    pub fn adjacency_matrix(&mut self) -> Result<Vec<Vec<i64>>, Error<R::Error>> {
        let vertices: usize = self.scalar()?;
        let mut matrix = Vec::with_capacity(vertices);
        for _ in 0..vertices {
            let row = self.int_row()?;
            if row.len() != vertices {
                return Err(Error::RowLength {
                    expected: vertices,
                    got: row.len(),
                });
            }
            matrix.push(row);
        }
        Ok(matrix)
    }
}
