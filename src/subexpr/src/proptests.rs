//! Property-based tests for parsing, rendering and deduplication.

use proptest::prelude::*;

use crate::{
    ast::Expr,
    optimize::Deduplicator,
    parser::parse,
    pretty::render,
};

// Few distinct names so that generated trees actually repeat themselves
fn small_name() -> impl Strategy<Value = String> + Clone {
    "[a-c]"
}

fn any_name() -> impl Strategy<Value = String> + Clone {
    "[A-Za-z_^`]{1,4}"
}

fn tree(name: impl Strategy<Value = String> + Clone + 'static) -> impl Strategy<Value = Expr> {
    let leaf = name.clone().prop_map(|name| Expr::variable(name));

    leaf.prop_recursive(6, 64, 2, move |inner| {
        (name.clone(), inner.clone(), inner)
            .prop_map(|(name, left, right)| Expr::application(name, left, right))
    })
}

fn letters(mut n: usize) -> String {
    let mut out = String::new();
    loop {
        out.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break out;
        }
    }
}

// Gives every leaf its own name, which makes all subtrees pairwise distinct.
fn relabel(expr: &Expr, counter: &mut usize) -> Expr {
    match expr {
        Expr::Application(app) => {
            let left = relabel(app.left(), counter);
            let right = relabel(app.right(), counter);
            Expr::application(app.name().clone(), left, right)
        }
        Expr::Variable(_) => {
            *counter += 1;
            Expr::variable(letters(*counter))
        }
        Expr::Substitution(_) => unreachable!(),
    }
}

fn expand(expr: &Expr, shapes: &[Expr]) -> Expr {
    match expr {
        Expr::Application(app) => Expr::application(
            app.name().clone(),
            expand(app.left(), shapes),
            expand(app.right(), shapes),
        ),
        Expr::Variable(name) => Expr::Variable(name.clone()),
        Expr::Substitution(id) => shapes[id.get() - 1].clone(),
    }
}

fn expanded_nodes(expr: &Expr) -> usize {
    match expr {
        Expr::Application(app) => 1 + expanded_nodes(app.left()) + expanded_nodes(app.right()),
        Expr::Variable(_) => 1,
        Expr::Substitution(_) => 0,
    }
}

// Pre-order walk checking that expanded nodes take ids 1, 2, 3, ... in order
// and that every substitution points back at an id already handed out.
fn check_numbering(expr: &Expr, next: &mut usize) -> bool {
    match expr {
        Expr::Application(app) => {
            *next += 1;
            check_numbering(app.left(), next) && check_numbering(app.right(), next)
        }
        Expr::Variable(_) => {
            *next += 1;
            true
        }
        Expr::Substitution(id) => id.get() <= *next,
    }
}

proptest! {
    #[test]
    fn render_then_parse_is_identity(expr in tree(any_name())) {
        prop_assert_eq!(parse(&render(&expr)).unwrap(), expr);
    }

    #[test]
    fn dedup_free_trees_come_back_unchanged(expr in tree(any_name())) {
        let expr = relabel(&expr, &mut 0);

        let mut deduplicator = Deduplicator::new();
        let rewritten = deduplicator.rewrite(&expr);

        prop_assert!(!rewritten.contains_substitution());
        prop_assert_eq!(deduplicator.len(), expr.size());
        prop_assert_eq!(&rewritten, &expr);
    }

    #[test]
    fn expanded_nodes_match_ids_handed_out(expr in tree(small_name())) {
        let mut deduplicator = Deduplicator::new();
        let rewritten = deduplicator.rewrite(&expr);

        prop_assert_eq!(expanded_nodes(&rewritten), deduplicator.len());
        prop_assert!(check_numbering(&rewritten, &mut 0));
    }

    #[test]
    fn substitutions_expand_back_to_the_original(expr in tree(small_name())) {
        let mut deduplicator = Deduplicator::new();
        let rewritten = deduplicator.rewrite(&expr);

        let shapes: Vec<Expr> = deduplicator.shapes().map(|(_, shape)| shape.clone()).collect();

        let expanded = expand(&rewritten, &shapes);

        prop_assert_eq!(&expanded, &expr);
    }
}

#[test]
fn letters_are_unique_names() {
    assert_eq!(letters(0), "a");
    assert_eq!(letters(25), "z");
    assert_eq!(letters(26), "ab");
}
