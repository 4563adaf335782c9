/**
 * @file optimize.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-06
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
 */

use crate::{ast::Expr, parser};

pub mod cse;

pub use cse::{eliminate_common_subexpressions, Deduplicator};

/// Full per-line pipeline: parse, deduplicate, render. Every call starts
/// from an empty table.
pub fn optimize_line(line: &str) -> Result<String, parser::Error> {
    let expr: Expr = parser::parse(line)?;

    Ok(expr.eliminate_common_subexpressions().to_pretty())
}
