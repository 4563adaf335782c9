/**
 * @file error.rs
 * @author Krisna Pranav
 * @brief Error Codes
 * @version 0.1
 * @date 2023-05-11
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
 */

use miette::Diagnostic;
use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(code(treecse::io))]
    Io(#[from] io::Error),

    #[error("Could not open {}", path.display())]
    #[diagnostic(code(treecse::open))]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse the expression on line {line_number}")]
    #[diagnostic(code(treecse::parse))]
    Parse {
        line_number: usize,
        #[source]
        #[diagnostic_source]
        source: subexpr::parser::Error,
    },

    #[error("{count} line(s) could not be parsed")]
    #[diagnostic(
        code(treecse::failed),
        help("the failing lines were written out empty")
    )]
    Failed { count: usize },

    #[error(transparent)]
    #[diagnostic(code(treecse::threads))]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    #[diagnostic(code(treecse::logger))]
    Logger(#[from] log::SetLoggerError),
}
