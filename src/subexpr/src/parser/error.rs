/**
 * @file error.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-06
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use itertools::Itertools;
use miette::{Diagnostic, SourceSpan};
use peg::str::LineCol;

#[derive(Debug, Clone, Diagnostic, thiserror::Error)]
#[error("{kind} at column {column}")]
#[diagnostic(code(subexpr::parse))]
pub struct Error {
    pub kind: ErrorKind,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub expected: Vec<&'static str>,
    #[source_code]
    src: String,
    #[label]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
}

impl Error {
    pub(crate) fn new(src: &str, error: peg::error::ParseError<LineCol>) -> Self {
        let LineCol {
            line,
            column,
            offset,
        } = error.location;

        let kind = match src[offset..].chars().next() {
            Some(c) => ErrorKind::UnexpectedChar(c),
            None => ErrorKind::UnexpectedEnd,
        };

        let expected: Vec<&'static str> = error.expected.tokens().sorted().dedup().collect();

        let help = if expected.is_empty() {
            None
        } else {
            Some(format!("expected one of {}", expected.iter().join(", ")))
        };

        Error {
            kind,
            offset,
            line,
            column,
            expected,
            src: src.to_string(),
            span: (offset, 0).into(),
            help,
        }
    }

    pub fn source_line(&self) -> &str {
        &self.src
    }
}
