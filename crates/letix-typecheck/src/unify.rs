//! Unification over equality constraints.
//!
//! The unifier maintains a disjoint-set partition of every term it has
//! seen: union by size, find with path compression. Unifying a
//! constraint merges the classes of its two sides. Nothing is judged
//! here; a class holding both `int` and `bool` is recorded like any
//! other, and the resolver rejects it afterwards.

use fxhash::FxHashMap;

use crate::constrain::Constraint;
use crate::term::Term;

/// A disjoint-set partition of type terms.
///
/// Terms are interned on first contact and keep that first-seen order,
/// which makes [`Classes::partitions`] deterministic for a fixed
/// constraint sequence.
#[derive(Debug, Default)]
pub struct Classes {
    parent: Vec<u32>,
    size: Vec<u32>,
    terms: Vec<Term>,
    index: FxHashMap<Term, u32>,
}

impl Classes {
    /// Creates an empty partition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms interned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no term has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Interns `term`, starting it in its own singleton class if it is
    /// new, and returns its slot.
    pub fn intern(&mut self, term: &Term) -> u32 {
        if let Some(&id) = self.index.get(term) {
            return id;
        }
        let id = self.terms.len() as u32;
        self.parent.push(id);
        self.size.push(1);
        self.terms.push(term.clone());
        self.index.insert(term.clone(), id);
        id
    }

    fn find(&mut self, id: u32) -> u32 {
        let mut root = id;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // Path compression: point everything on the walk at the root.
        let mut cursor = id;
        while self.parent[cursor as usize] != root {
            let next = self.parent[cursor as usize];
            self.parent[cursor as usize] = root;
            cursor = next;
        }
        root
    }

    /// Merges the classes of two terms. Merging a class with itself is
    /// a no-op, so union is idempotent.
    pub fn union(&mut self, lhs: &Term, rhs: &Term) {
        let a = self.intern(lhs);
        let b = self.intern(rhs);
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return;
        }
        // Union by size: the smaller tree hangs off the larger root.
        if self.size[ra as usize] < self.size[rb as usize] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb as usize] = ra;
        self.size[ra as usize] += self.size[rb as usize];
    }

    /// Whether two terms currently share a class. Terms never seen
    /// before land in fresh singletons, so an unseen pair is equal only
    /// when the terms themselves are.
    pub fn same_class(&mut self, lhs: &Term, rhs: &Term) -> bool {
        let a = self.intern(lhs);
        let b = self.intern(rhs);
        self.find(a) == self.find(b)
    }

    /// Enumerates the equivalence classes.
    ///
    /// Classes appear in order of their earliest-interned member, and
    /// members within a class keep their interning order.
    pub fn partitions(&mut self) -> Vec<Vec<Term>> {
        let mut classes: Vec<Vec<Term>> = Vec::new();
        let mut slot_of_root: FxHashMap<u32, usize> = FxHashMap::default();
        for id in 0..self.terms.len() as u32 {
            let root = self.find(id);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                classes.push(Vec::new());
                classes.len() - 1
            });
            classes[slot].push(self.terms[id as usize].clone());
        }
        classes
    }
}

/// Folds a constraint sequence into its equivalence classes.
#[must_use]
pub fn unify(constraints: &[Constraint]) -> Classes {
    let mut classes = Classes::new();
    for constraint in constraints {
        classes.union(&constraint.lhs, &constraint.rhs);
    }
    classes
}
