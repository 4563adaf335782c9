/**
 * @file cse.rs
 * @author Krisna Pranav
 * @version 0.1
 * @date 2023-05-08
 *
 * @copyright Copyright (c) 2023 Krisna Pranav, NanoBlocksDevelopers
 *
 */

use indexmap::{map::Entry, IndexMap};
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

use crate::ast::{Expr, ReplacementId};

// Keys hash through their cached structural hash, so Fx only has to mix a
// single u64.
type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Table of subexpressions seen so far, keyed by the nodes of the input tree
/// as they were parsed. Meant to live for exactly one tree.
#[derive(Debug)]
pub struct Deduplicator<'a> {
    seen: IndexMap<&'a Expr, ReplacementId, FxBuildHasher>,
    next: ReplacementId,
}

impl<'a> Default for Deduplicator<'a> {
    fn default() -> Self {
        Deduplicator {
            seen: IndexMap::default(),
            next: ReplacementId::FIRST,
        }
    }
}

impl<'a> Deduplicator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites `expr` in pre-order. The first occurrence of every shape gets
    /// the next id and is kept; any later occurrence becomes a substitution
    /// and its children are never visited.
    ///
    /// # Panics
    ///
    /// If `expr` already contains a substitution.
    pub fn rewrite(&mut self, expr: &'a Expr) -> Expr {
        if let Expr::Substitution(id) = expr {
            unreachable!("substitution {id} found in a tree that has not been rewritten yet");
        }

        match self.seen.entry(expr) {
            Entry::Occupied(entry) => return Expr::Substitution(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(self.next);
                self.next.increment();
            }
        }

        match expr {
            Expr::Application(app) => {
                let left = self.rewrite(app.left());
                let right = self.rewrite(app.right());

                Expr::application(app.name().clone(), left, right)
            }
            Expr::Variable(name) => Expr::Variable(name.clone()),
            Expr::Substitution(_) => unreachable!(),
        }
    }

    /// Number of ids handed out so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Every distinct shape seen, in id order.
    pub fn shapes(&self) -> impl Iterator<Item = (ReplacementId, &'a Expr)> + '_ {
        self.seen.iter().map(|(expr, id)| (*id, *expr))
    }
}

pub fn eliminate_common_subexpressions(tree: Expr) -> Expr {
    let mut deduplicator = Deduplicator::new();

    let rewritten = deduplicator.rewrite(&tree);

    if log::log_enabled!(log::Level::Trace) {
        log::trace!(
            "{} distinct subexpressions in a tree of {} nodes",
            deduplicator.len(),
            tree.size()
        );

        for (id, shape) in deduplicator.shapes() {
            log::trace!("  {id}: {shape}");
        }
    }

    rewritten
}

impl Expr {
    pub fn eliminate_common_subexpressions(self) -> Expr {
        eliminate_common_subexpressions(self)
    }
}
