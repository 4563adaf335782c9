/**
 * @file lib.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-06
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

pub mod ast;
pub mod optimize;
pub mod parser;
pub mod pretty;

#[cfg(test)]
mod proptests;

pub use ast::{is_letter, Application, Expr, Name, ReplacementId};
pub use optimize::{eliminate_common_subexpressions, optimize_line, Deduplicator};
pub use parser::parse;
pub use pretty::render;
