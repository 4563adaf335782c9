/**
 * @file ast.rs
 * @author Krisna Pranav
 * @brief AST functionalities
 * @version 0.1
 * @date 2023-05-06
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
*/

use rustc_hash::FxHasher;
use std::{
    fmt::{self, Display},
    hash::{self, Hash, Hasher},
};

/// Characters accepted inside a name: everything from `'A'` to `'z'` by code
/// point, which also lets `[`, `\`, `]`, `^`, `_` and the backtick through.
pub fn is_letter(c: char) -> bool {
    ('A'..='z').contains(&c)
}

#[derive(Debug, Clone, Eq)]
pub struct Name {
    text: String,
    hash: u64,
}

impl Name {
    pub fn new(text: impl Into<String>) -> Name {
        let text = text.into();

        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);

        Name {
            hash: hasher.finish(),
            text,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl hash::Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Name::new(text)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Identifier handed out to the first occurrence of a subexpression. Always
/// positive; the first one assigned on a line is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReplacementId(usize);

impl ReplacementId {
    pub const FIRST: ReplacementId = ReplacementId(1);

    pub fn new(id: usize) -> Option<Self> {
        (id > 0).then_some(ReplacementId(id))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

impl Display for ReplacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub enum Expr {
    Application(Application),
    Variable(Name),
    /// Only ever produced by the rewrite, never accepted by it.
    Substitution(ReplacementId),
}

/// A named node with two owned children. The structural hash is computed
/// once on construction; equality ignores it.
#[derive(Debug, Clone)]
pub struct Application {
    name: Name,
    left: Box<Expr>,
    right: Box<Expr>,
    hash: u64,
}

impl Application {
    pub fn new(name: Name, left: Expr, right: Expr) -> Self {
        let hash = name
            .hash
            .wrapping_add(left.structural_hash())
            .wrapping_add(right.structural_hash());

        Application {
            name,
            left: Box::new(left),
            right: Box::new(right),
            hash,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

impl PartialEq for Application {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.left == other.left && self.right == other.right
    }
}

impl Eq for Application {}

impl Expr {
    pub fn application(name: impl Into<Name>, left: Expr, right: Expr) -> Self {
        Expr::Application(Application::new(name.into(), left, right))
    }

    pub fn variable(name: impl Into<Name>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn substitution(id: ReplacementId) -> Self {
        Expr::Substitution(id)
    }

    /// Cheap summary used to bucket expressions during deduplication. Equal
    /// trees always agree on it, distinct trees may collide.
    pub fn structural_hash(&self) -> u64 {
        match self {
            Expr::Application(app) => app.hash,
            Expr::Variable(name) => name.hash,
            Expr::Substitution(id) => id.0 as u64,
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Application(app) => 1 + app.left.size() + app.right.size(),
            Expr::Variable(_) | Expr::Substitution(_) => 1,
        }
    }

    pub fn contains_substitution(&self) -> bool {
        match self {
            Expr::Application(app) => {
                app.left.contains_substitution() || app.right.contains_substitution()
            }
            Expr::Variable(_) => false,
            Expr::Substitution(_) => true,
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Application(a), Expr::Application(b)) => a == b,
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (Expr::Substitution(a), Expr::Substitution(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl hash::Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}
