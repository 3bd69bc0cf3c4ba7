//! Use-definition analysis.
//!
//! Finds variables used outside any `let` that binds them, before
//! anything runs. The walk carries the set of names in scope; a
//! binding is visible in its `let` body only, not in its own bound
//! expression.

use fxhash::FxHashSet;

use letix_syntax::Expr;

/// Collects the free variables of `expr`.
///
/// Returns the names sorted and deduplicated, so callers report them
/// deterministically. An empty result means every use is covered by a
/// binding and evaluation cannot hit
/// [`EvalError::UndefinedVariable`](crate::EvalError::UndefinedVariable).
#[must_use]
pub fn undefined_names(expr: &Expr) -> Vec<String> {
    let mut free = FxHashSet::default();
    let mut bound = Vec::new();
    collect(expr, &mut bound, &mut free);
    let mut names: Vec<String> = free.into_iter().collect();
    names.sort_unstable();
    names
}

fn collect(expr: &Expr, bound: &mut Vec<String>, free: &mut FxHashSet<String>) {
    match expr {
        Expr::IntLiteral { .. } | Expr::BoolLiteral { .. } => {}
        Expr::Variable { name, .. } => {
            if !bound.iter().any(|b| b == name) {
                free.insert(name.clone());
            }
        }
        Expr::Let { name, bound: bound_expr, body, .. } => {
            collect(bound_expr, bound, free);
            bound.push(name.clone());
            collect(body, bound, free);
            bound.pop();
        }
        Expr::IfThenElse { cond, then_branch, else_branch, .. } => {
            collect(cond, bound, free);
            collect(then_branch, bound, free);
            collect(else_branch, bound, free);
        }
        Expr::Unary { operand, .. } => collect(operand, bound, free),
        Expr::Binary { left, right, .. } => {
            collect(left, bound, free);
            collect(right, bound, free);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letix_syntax::parse;

    fn free_in(source: &str) -> Vec<String> {
        undefined_names(&parse(source).unwrap())
    }

    #[test]
    fn test_closed_programs_have_no_free_names() {
        assert!(free_in("let x <- 1 in x + 2 end").is_empty());
        assert!(free_in("1 + 2 * 3").is_empty());
    }

    #[test]
    fn test_free_uses_are_reported_sorted() {
        assert_eq!(free_in("b + a + b"), ["a", "b"]);
    }

    #[test]
    fn test_binding_does_not_cover_its_own_bound_expression() {
        assert_eq!(free_in("let x <- x + 1 in x end"), ["x"]);
    }

    #[test]
    fn test_binding_ends_with_its_body() {
        assert_eq!(free_in("(let x <- 1 in x end) + x"), ["x"]);
    }

    #[test]
    fn test_shadowing_still_covers_uses() {
        assert!(free_in("let x <- 1 in let x <- true in x end end").is_empty());
    }
}
