/**
 * @file cli.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-11
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    num::NonZeroUsize,
    path::PathBuf,
};

use clap::{ArgAction, Parser};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use crate::{
    driver::{self, Options, Summary},
    error::Error,
};

/// Replace repeated subexpressions with the id of their first occurrence.
///
/// The first input line is a count and is skipped; every following line is
/// one expression such as `f(a,g(a,a))`.
#[derive(Debug, Parser)]
#[command(name = "treecse", version, about)]
pub struct Args {
    /// Read expressions from this file instead of stdin
    pub input: Option<PathBuf>,

    /// Write results to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short, long, default_value = "1")]
    pub jobs: NonZeroUsize,

    /// Emit an empty line for expressions that fail to parse and carry on
    #[arg(short, long)]
    pub keep_going: bool,

    /// More logging, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn options(&self) -> Options {
        Options {
            jobs: self.jobs.get(),
            keep_going: self.keep_going,
        }
    }
}

/// Logs go to stderr so they never interleave with the results.
pub fn init_logger(level: LevelFilter) -> Result<(), Error> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;

    Ok(())
}

pub fn execute(args: &Args) -> Result<Summary, Error> {
    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = driver::run(input, output, &args.options())?;

    if summary.failed > 0 {
        return Err(Error::Failed {
            count: summary.failed,
        });
    }

    Ok(summary)
}
