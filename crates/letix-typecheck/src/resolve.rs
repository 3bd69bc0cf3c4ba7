//! Resolution of equivalence classes to ground types.
//!
//! After unification every term sits in exactly one class. A class is
//! well-typed when it contains exactly one distinct ground type; that
//! type then labels every member. A class with none is ambiguous, a
//! class with both is contradictory, and either ends the run at the
//! first class that fails.

use fxhash::FxHashMap;

use crate::error::{Result, TypeError, TypeErrorKind};
use crate::term::{ConcreteType, Term};
use crate::unify::Classes;

/// The resolved assignment of ground types to terms.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeMap {
    types: FxHashMap<Term, ConcreteType>,
}

impl TypeMap {
    /// The resolved type of a term.
    ///
    /// Ground terms resolve to themselves even when the program never
    /// constrained them, so a bare literal still has a type.
    #[must_use]
    pub fn type_of(&self, term: &Term) -> Option<ConcreteType> {
        self.types.get(term).copied().or_else(|| term.concrete())
    }

    /// The resolved type of a program variable.
    #[must_use]
    pub fn type_of_name(&self, name: &str) -> Option<ConcreteType> {
        self.types.get(&Term::name(name)).copied()
    }

    /// Iterates over every explicitly resolved term.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, ConcreteType)> {
        self.types.iter().map(|(term, ty)| (term, *ty))
    }

    /// Number of explicitly resolved terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing was explicitly resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Labels every term with the single ground type of its class.
///
/// Classes are visited in first-seen order and the run stops at the
/// first class that is ambiguous or contradictory, so the reported
/// failure is deterministic for a fixed program.
///
/// # Errors
///
/// [`TypeErrorKind::Unresolved`] when a class holds no ground type,
/// [`TypeErrorKind::Conflicting`] when it holds both.
pub fn resolve(classes: &mut Classes) -> Result<TypeMap> {
    let mut map = TypeMap::default();
    for members in classes.partitions() {
        let mut ground: Option<ConcreteType> = None;
        for member in &members {
            match (ground, member.concrete()) {
                (None, Some(ty)) => ground = Some(ty),
                (Some(seen), Some(ty)) if seen != ty => {
                    return Err(TypeError::new(
                        TypeErrorKind::Conflicting,
                        representative(&members),
                    ));
                }
                _ => {}
            }
        }
        let Some(ty) = ground else {
            return Err(TypeError::new(
                TypeErrorKind::Unresolved,
                representative(&members),
            ));
        };
        for member in members {
            map.types.insert(member, ty);
        }
    }
    Ok(map)
}

/// Picks the term to report for a failing class: the first named
/// program variable if the class has one, the first member otherwise.
fn representative(members: &[Term]) -> Term {
    members
        .iter()
        .find(|term| matches!(term, Term::Name(_)))
        .or_else(|| members.first())
        .cloned()
        .unwrap_or(Term::Int)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constrain::Constraint;
    use crate::unify::unify;

    fn eq(lhs: Term, rhs: Term) -> Constraint {
        Constraint::new(lhs, rhs)
    }

    #[test]
    fn test_single_ground_type_labels_the_class() {
        let mut classes = unify(&[
            eq(Term::name("x"), Term::name("y")),
            eq(Term::name("y"), Term::Int),
        ]);
        let map = resolve(&mut classes).unwrap();
        assert_eq!(map.type_of_name("x"), Some(ConcreteType::Int));
        assert_eq!(map.type_of_name("y"), Some(ConcreteType::Int));
    }

    #[test]
    fn test_class_without_ground_type_is_unresolved() {
        let mut classes = unify(&[eq(Term::name("x"), Term::name("y"))]);
        let err = resolve(&mut classes).unwrap_err();
        assert_eq!(err.kind(), &TypeErrorKind::Unresolved);
        assert_eq!(err.term(), &Term::name("x"));
    }

    #[test]
    fn test_class_with_both_ground_types_conflicts() {
        let mut classes = unify(&[
            eq(Term::name("x"), Term::Int),
            eq(Term::name("x"), Term::Bool),
        ]);
        let err = resolve(&mut classes).unwrap_err();
        assert_eq!(err.kind(), &TypeErrorKind::Conflicting);
        assert_eq!(err.term(), &Term::name("x"));
    }

    #[test]
    fn test_first_failing_class_wins() {
        // The "a" class is interned first and fails first even though
        // the "b" class also conflicts.
        let mut classes = unify(&[
            eq(Term::name("a"), Term::name("a2")),
            eq(Term::name("b"), Term::Int),
            eq(Term::name("b"), Term::Bool),
        ]);
        let err = resolve(&mut classes).unwrap_err();
        assert_eq!(err.kind(), &TypeErrorKind::Unresolved);
        assert_eq!(err.term(), &Term::name("a"));
    }

    #[test]
    fn test_duplicate_ground_members_are_fine() {
        let mut classes = unify(&[
            eq(Term::Int, Term::Int),
            eq(Term::name("x"), Term::Int),
        ]);
        let map = resolve(&mut classes).unwrap();
        assert_eq!(map.type_of_name("x"), Some(ConcreteType::Int));
    }

    #[test]
    fn test_ground_terms_resolve_to_themselves() {
        let map = TypeMap::default();
        assert_eq!(map.type_of(&Term::Int), Some(ConcreteType::Int));
        assert_eq!(map.type_of(&Term::Bool), Some(ConcreteType::Bool));
        assert_eq!(map.type_of(&Term::name("x")), None);
    }
}
