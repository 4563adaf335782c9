/**
 * @file driver.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-11
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::io::{BufRead, Write};

use log::{debug, error, info, warn};
use rayon::prelude::*;
use subexpr::{optimize_line, parser};

use crate::error::Error;

// Parsing, rewriting, rendering and dropping a tree all recurse once per
// nesting level, so workers get at least the stack the main thread has.
const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Options {
    /// Worker threads. With more than one the whole input is read up front.
    pub jobs: usize,
    /// Write an empty line for an unparsable expression instead of stopping.
    pub keep_going: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            jobs: 1,
            keep_going: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// The count announced on the first line, if it was a number.
    pub declared: Option<usize>,
    pub processed: usize,
    pub failed: usize,
}

/// Reads the count line, then rewrites every following line on its own and
/// writes the results in input order. The announced count is never used to
/// decide how many lines to read.
pub fn run<R, W>(input: R, mut output: W, options: &Options) -> Result<Summary, Error>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    let mut summary = Summary::default();

    let header = match lines.next() {
        Some(header) => header?,
        None => {
            debug!("empty input");
            return Ok(summary);
        }
    };

    summary.declared = match header.trim().parse::<usize>() {
        Ok(count) => Some(count),
        Err(_) => {
            warn!("ignoring malformed line count {header:?}");
            None
        }
    };

    if options.jobs > 1 {
        let lines = lines.collect::<Result<Vec<String>, _>>()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.jobs)
            .stack_size(WORKER_STACK_SIZE)
            .build()?;

        debug!("processing {} lines on {} threads", lines.len(), options.jobs);

        let results: Vec<Result<String, parser::Error>> =
            pool.install(|| lines.par_iter().map(|line| optimize_line(line)).collect());

        for (index, result) in results.into_iter().enumerate() {
            emit(&mut output, &mut summary, index, result, options)?;
        }
    } else {
        for (index, line) in lines.enumerate() {
            let result = optimize_line(&line?);
            emit(&mut output, &mut summary, index, result, options)?;
        }
    }

    output.flush()?;

    match summary.declared {
        Some(declared) if declared != summary.processed => info!(
            "line count announced {declared} expressions, found {}",
            summary.processed
        ),
        _ => debug!("processed {} expressions", summary.processed),
    }

    Ok(summary)
}

fn emit<W: Write>(
    output: &mut W,
    summary: &mut Summary,
    index: usize,
    result: Result<String, parser::Error>,
    options: &Options,
) -> Result<(), Error> {
    // the count line is line 1
    let line_number = index + 2;

    summary.processed += 1;

    match result {
        Ok(rendered) => writeln!(output, "{rendered}")?,
        Err(source) if options.keep_going => {
            error!("line {line_number}: {source}");
            summary.failed += 1;
            writeln!(output)?;
        }
        Err(source) => {
            return Err(Error::Parse {
                line_number,
                source,
            })
        }
    }

    Ok(())
}
