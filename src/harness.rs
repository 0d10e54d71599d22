use std::io::{self, Write};

use crate::reader::{Readable, Reader};
use crate::{Error, Input, IoReader, Printer};

/// Run a solution function between an input source and an output writer.
///
/// This is the generated `main()` of a problem, minus the problem: it builds the [`Input`] and
/// [`Printer`], hands both to the user-supplied closure, and flushes the output on success.
/// The closure does the problem-specific part — consume the declared input fields, compute,
/// print the result.
///
/// ```rust
/// let mut out = Vec::new();
/// judgeio::run("1 2 3 4\n", &mut out, |input, printer| {
///     let mut row = input.int_row()?;
///     row.reverse();
///     printer.row(&row)?;
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(out, b"4 3 2 1\n");
/// ```
pub fn run<'a, S, W, F>(
    source: S,
    output: W,
    solution: F,
) -> Result<(), Error<<S::Reader as Reader>::Error>>
where
    S: Readable<'a>,
    W: Write,
    F: FnOnce(
        &mut Input<S::Reader>,
        &mut Printer<W>,
    ) -> Result<(), Error<<S::Reader as Reader>::Error>>,
{
    let mut input = Input::new(source);
    let mut printer = Printer::new(output);
    solution(&mut input, &mut printer)?;
    printer.flush().map_err(Error::Write)
}

/// [`run`] wired to the process's stdin and stdout, both locked for the duration.
///
/// This is what a deployed problem binary calls from its `main()`.
pub fn run_stdio<F>(solution: F) -> Result<(), Error<io::Error>>
where
    F: FnOnce(
        &mut Input<IoReader<io::StdinLock<'static>>>,
        &mut Printer<io::StdoutLock<'static>>,
    ) -> Result<(), Error<io::Error>>,
{
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run(IoReader::new(stdin), stdout, solution)
}
