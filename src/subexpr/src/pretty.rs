/**
 * @file pretty.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-07
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use pretty::RcDoc;
use std::fmt;

use crate::ast::Expr;

// The documents never contain line breaks, so the width is never hit.
const WIDTH: usize = 80;

/// Renders a tree back to its textual form: `name(left,right)` for
/// applications, the bare name for variables, the decimal id for
/// substitutions.
pub fn render(expr: &Expr) -> String {
    expr.to_pretty()
}

impl Expr {
    pub fn to_pretty(&self) -> String {
        self.to_string()
    }

    fn to_doc(&self) -> RcDoc<'_, ()> {
        match self {
            Expr::Application(app) => RcDoc::text(app.name().as_str())
                .append(RcDoc::text("("))
                .append(app.left().to_doc())
                .append(RcDoc::text(","))
                .append(app.right().to_doc())
                .append(RcDoc::text(")")),
            Expr::Variable(name) => RcDoc::text(name.as_str()),
            Expr::Substitution(id) => RcDoc::as_string(id),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_doc().render_fmt(WIDTH, f)
    }
}
