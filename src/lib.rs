#![deny(missing_docs)]
// This crate parses untrusted submissions' judge input.
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod dense;
mod error;
mod harness;
mod input;
pub mod levelorder;
pub mod list;
mod never;
mod output;
mod reader;
mod token;
mod tree;

pub use error::Error;
pub use harness::{run, run_stdio};
pub use input::Input;
pub use list::ListNode;
pub use never::Never;
pub use output::Printer;
pub use reader::{IoReader, Readable, Reader, StringReader};
pub use token::Token;
pub use tree::TreeNode;
