//! The type-term model shared by every stage of inference.
//!
//! A [`Term`] is the unit that constraints relate: one of the two
//! ground types, an inference-introduced type variable, or the name of
//! a `let`-bound program variable used as a type term directly. Any two
//! terms are either identical values or related only through
//! constraints; there is no coercion between `int` and `bool`.

use std::fmt;

/// Identifier of a type variable, unique within one inference run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVarId(pub u32);

impl fmt::Display for TypeVarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TV_{}", self.0)
    }
}

/// The two ground types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcreteType {
    /// The integer type.
    Int,
    /// The boolean type.
    Bool,
}

impl fmt::Display for ConcreteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcreteType::Int => write!(f, "int"),
            ConcreteType::Bool => write!(f, "bool"),
        }
    }
}

/// A type term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// The ground type `int`.
    Int,

    /// The ground type `bool`.
    Bool,

    /// A type variable introduced during constraint generation.
    Var(TypeVarId),

    /// A `let`-bound program variable, used as a type term directly.
    /// Its type is whatever its equivalence class resolves to.
    Name(String),
}

impl Term {
    /// Builds the term for a program variable name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Term {
        Term::Name(name.into())
    }

    /// The concrete type this term denotes on its own, if any.
    #[must_use]
    pub fn concrete(&self) -> Option<ConcreteType> {
        match self {
            Term::Int => Some(ConcreteType::Int),
            Term::Bool => Some(ConcreteType::Bool),
            Term::Var(_) | Term::Name(_) => None,
        }
    }
}

impl From<ConcreteType> for Term {
    fn from(ty: ConcreteType) -> Term {
        match ty {
            ConcreteType::Int => Term::Int,
            ConcreteType::Bool => Term::Bool,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Int => write!(f, "int"),
            Term::Bool => write!(f, "bool"),
            Term::Var(id) => write!(f, "{id}"),
            Term::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Source of fresh type variables for one inference run.
///
/// Run-scoped by construction: every run builds its own source, so
/// identifiers never collide across runs and concurrent runs share no
/// state. Within a run, no two calls to [`FreshVars::next`] return
/// equal terms.
#[derive(Debug, Default)]
pub struct FreshVars {
    next: u32,
}

impl FreshVars {
    /// Creates a source that has issued nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a type variable distinct from every previous one.
    pub fn next(&mut self) -> Term {
        let id = TypeVarId(self.next);
        self.next += 1;
        Term::Var(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_vars_are_distinct() {
        let mut fresh = FreshVars::new();
        let issued: Vec<_> = (0..100).map(|_| fresh.next()).collect();
        for (i, a) in issued.iter().enumerate() {
            assert!(a.concrete().is_none());
            for b in &issued[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_separate_runs_restart() {
        // Distinctness is only promised within one run.
        assert_eq!(FreshVars::new().next(), FreshVars::new().next());
    }

    #[test]
    fn test_concrete() {
        assert_eq!(Term::Int.concrete(), Some(ConcreteType::Int));
        assert_eq!(Term::Bool.concrete(), Some(ConcreteType::Bool));
        assert_eq!(Term::name("x").concrete(), None);
        assert_eq!(FreshVars::new().next().concrete(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::Var(TypeVarId(7)).to_string(), "TV_7");
        assert_eq!(Term::name("count").to_string(), "count");
        assert_eq!(Term::Int.to_string(), "int");
        assert_eq!(ConcreteType::Bool.to_string(), "bool");
    }
}
