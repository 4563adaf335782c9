/**
 * @file parser.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-06
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use std::str::FromStr;

use crate::ast::{is_letter, Expr, Name};

pub use error::{Error, ErrorKind};

pub mod error;

/// Parses one line holding a single expression. The whole line has to be
/// consumed; trailing characters are reported rather than dropped.
pub fn parse(src: &str) -> Result<Expr, Error> {
    tree::expr(src).map_err(|e| Error::new(src, e))
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

peg::parser! {
    grammar tree() for str {
        // The separator and the closing character are consumed without being
        // checked, so `f(a;b]` reads the same as `f(a,b)`.
        pub rule expr() -> Expr
          = n:name() args:("(" l:expr() [_] r:expr() [_] { (l, r) })? {
            match args {
                Some((left, right)) => Expr::application(n, left, right),
                None => Expr::variable(n),
            }
          }

        // May be empty: a missing name is not an error on its own.
        rule name() -> Name
          = text:$([c if is_letter(c)]*) { Name::new(text) }
    }
}
