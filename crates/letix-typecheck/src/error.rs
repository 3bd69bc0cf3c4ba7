//! Inference failure reporting.

use std::error::Error;
use std::fmt;

use crate::term::Term;

/// Result alias for the inference pipeline.
pub type Result<T> = std::result::Result<T, TypeError>;

/// Why a class failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeErrorKind {
    /// The class contains no concrete type at all.
    Unresolved,
    /// The class contains both `int` and `bool`.
    Conflicting,
}

/// A failed inference run.
///
/// The user-facing rendering is the single line `Type error`, whatever
/// the cause. The kind and a representative term from the failing
/// class are kept for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeError {
    kind: TypeErrorKind,
    term: Term,
}

impl TypeError {
    pub(crate) fn new(kind: TypeErrorKind, term: Term) -> Self {
        Self { kind, term }
    }

    /// Whether the failing class was empty of concrete types or held
    /// conflicting ones.
    #[must_use]
    pub fn kind(&self) -> &TypeErrorKind {
        &self.kind
    }

    /// A term from the class that failed to resolve.
    #[must_use]
    pub fn term(&self) -> &Term {
        &self.term
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type error")
    }
}

impl Error for TypeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_contract_line() {
        let conflicting = TypeError::new(TypeErrorKind::Conflicting, Term::name("x"));
        let unresolved = TypeError::new(TypeErrorKind::Unresolved, Term::name("y"));
        assert_eq!(conflicting.to_string(), "Type error");
        assert_eq!(unresolved.to_string(), "Type error");
    }

    #[test]
    fn test_accessors() {
        let err = TypeError::new(TypeErrorKind::Conflicting, Term::name("x"));
        assert_eq!(err.kind(), &TypeErrorKind::Conflicting);
        assert_eq!(err.term(), &Term::name("x"));
    }
}
