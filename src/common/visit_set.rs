use std::{
    collections::HashSet,
    hash::BuildHasher,
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use fixedbitset::FixedBitSet;

use crate::core::id::IdType;

/// A set of visited cities or routes.
///
/// Unlike a plain traversal, backtracking search needs to take the mark back
/// when it leaves a branch, hence [`VisitSet::unvisit`].
pub trait VisitSet<I: IdType> {
    /// Marks the element as visited.
    ///
    /// Returns `true` when this is the first time the element is visited.
    fn visit(&mut self, id: I) -> bool;

    /// Removes the visited mark.
    ///
    /// Returns `true` if the element was marked before.
    fn unvisit(&mut self, id: &I) -> bool;

    /// Returns `true` if the element is marked as visited.
    fn is_visited(&self, id: &I) -> bool;
}

impl<I: IdType, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn unvisit(&mut self, id: &I) -> bool {
        self.remove(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }
}

impl<I: IdType> VisitSet<I> for FixedBitSet {
    fn visit(&mut self, id: I) -> bool {
        let index = id.as_usize();
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn unvisit(&mut self, id: &I) -> bool {
        let index = id.as_usize();
        let was_visited = self.contains(index);
        if was_visited {
            self.set(index, false);
        }
        was_visited
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id.as_usize())
    }
}

impl<I: IdType> VisitSet<I> for TypedBitSet<I> {
    fn visit(&mut self, id: I) -> bool {
        (**self).visit(id)
    }

    fn unvisit(&mut self, id: &I) -> bool {
        VisitSet::<I>::unvisit(&mut **self, id)
    }

    fn is_visited(&self, id: &I) -> bool {
        (**self).is_visited(id)
    }
}

/// Tiny [`FixedBitSet`] wrapper adding a generic type of the elements the set
/// holds.
pub struct TypedBitSet<T> {
    inner: FixedBitSet,
    ty: PhantomData<T>,
}

impl<T> TypedBitSet<T> {
    /// Creates a new empty bit set.
    pub fn new() -> Self {
        Self {
            inner: FixedBitSet::new(),
            ty: PhantomData,
        }
    }

    /// Creates a new empty bit set with given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FixedBitSet::with_capacity(capacity),
            ty: PhantomData,
        }
    }
}

impl<T> Default for TypedBitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for TypedBitSet<T> {
    type Target = FixedBitSet;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for TypedBitSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use crate::core::id::VertexId;

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn check_backtracking<S: VisitSet<VertexId>>(mut set: S) {
        assert!(set.visit(v(0)));
        assert!(set.visit(v(5)));
        assert!(!set.visit(v(5)));

        assert!(set.unvisit(&v(5)));
        assert!(!set.unvisit(&v(5)));
        assert!(!set.is_visited(&v(5)));
        assert!(set.is_visited(&v(0)));

        // Revisiting after unmarking counts as a first visit again.
        assert!(set.visit(v(5)));
    }

    #[test]
    fn typed_bit_set() {
        check_backtracking(TypedBitSet::<VertexId>::with_capacity(2));
    }

    #[test]
    fn hash_set() {
        check_backtracking(FxHashSet::<VertexId>::default());
    }

    #[test]
    fn bit_set_grows() {
        let mut set = TypedBitSet::<VertexId>::new();
        assert!(set.visit(v(63)));
        assert!(set.is_visited(&v(63)));
        assert!(!set.is_visited(&v(64)));
    }
}
