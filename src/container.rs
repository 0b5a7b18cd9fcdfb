//! The capability a sparse container exposes to the iterators.
//!
//! A container is addressed by a dense ordinal position `0..size()`; each
//! position carries a key and a value. Keys need not be contiguous, the
//! ordinal is what the iterators walk.
//!
//! Implementations must answer every call from the container's current
//! state. The iterators never cache `size()`, so growth or shrinkage between
//! calls is observed on the next call.

use std::cell::RefCell;

use tinyvec::{Array, TinyVec};

pub trait IndexedContainer {
    type Key;
    type Value;

    fn size(&self) -> usize;

    /// Key at `position`. Callers guarantee `position < self.size()`.
    fn key_at(&self, position: usize) -> Self::Key;

    /// Value at `position`. Callers guarantee `position < self.size()`.
    fn value_at(&self, position: usize) -> Self::Value;
}

/// A container whose values can be overwritten in place through a shared
/// reference, so that several iterators may hold it at once.
pub trait IndexedContainerMut: IndexedContainer {
    /// Overwrites the value at `position` without touching its key or the
    /// container's size. Callers guarantee `position < self.size()`.
    fn set_value_at(&self, position: usize, value: Self::Value);
}

impl<K: Copy, V: Clone> IndexedContainer for [(K, V)] {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn key_at(&self, position: usize) -> K {
        self[position].0
    }

    fn value_at(&self, position: usize) -> V {
        self[position].1.clone()
    }
}

impl<K: Copy, V: Clone, const N: usize> IndexedContainer for [(K, V); N] {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        N
    }

    fn key_at(&self, position: usize) -> K {
        self.as_slice().key_at(position)
    }

    fn value_at(&self, position: usize) -> V {
        self.as_slice().value_at(position)
    }
}

impl<K: Copy, V: Clone> IndexedContainer for Vec<(K, V)> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn key_at(&self, position: usize) -> K {
        self.as_slice().key_at(position)
    }

    fn value_at(&self, position: usize) -> V {
        self.as_slice().value_at(position)
    }
}

impl<K, V, A> IndexedContainer for TinyVec<A>
where
    K: Copy,
    V: Clone,
    A: Array<Item = (K, V)>,
{
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn key_at(&self, position: usize) -> K {
        self.as_slice().key_at(position)
    }

    fn value_at(&self, position: usize) -> V {
        self.as_slice().value_at(position)
    }
}

impl<C: IndexedContainer> IndexedContainer for RefCell<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn size(&self) -> usize {
        self.borrow().size()
    }

    fn key_at(&self, position: usize) -> C::Key {
        self.borrow().key_at(position)
    }

    fn value_at(&self, position: usize) -> C::Value {
        self.borrow().value_at(position)
    }
}

impl<C> IndexedContainerMut for RefCell<C>
where
    C: IndexedContainer + AsMut<[(C::Key, C::Value)]>,
{
    fn set_value_at(&self, position: usize, value: C::Value) {
        self.borrow_mut().as_mut()[position].1 = value;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tinyvec::{tiny_vec, TinyVec};

    use super::{IndexedContainer, IndexedContainerMut};

    #[test]
    fn slice_reads() {
        let entries = vec![(23, "x"), (42, "y")];
        assert_eq!(entries.size(), 2);
        assert_eq!(entries.key_at(1), 42);
        assert_eq!(entries.value_at(0), "x");
        assert_eq!(entries.as_slice().size(), 2);
        assert_eq!([(7i64, true)].size(), 1);
    }

    #[test]
    fn size_is_live() {
        let entries = RefCell::new(vec![(1, 10)]);
        assert_eq!(entries.size(), 1);
        entries.borrow_mut().push((2, 20));
        assert_eq!(entries.size(), 2);
        entries.borrow_mut().clear();
        assert_eq!(entries.size(), 0);
    }

    #[test]
    fn set_value_at_keeps_key_and_size() {
        let entries = RefCell::new(vec![(23, 1i64), (42, 2i64)]);
        entries.set_value_at(1, -1);
        assert_eq!(entries.size(), 2);
        assert_eq!(entries.key_at(1), 42);
        assert_eq!(entries.value_at(1), -1);
        assert_eq!(entries.value_at(0), 1);
    }

    #[test]
    fn tinyvec_storage() {
        let inline: TinyVec<[(i32, bool); 4]> =
            tiny_vec!([(i32, bool); 4] => (3, true), (5, false));
        let entries = RefCell::new(inline);
        assert_eq!(entries.size(), 2);
        entries.set_value_at(0, false);
        assert!(!entries.value_at(0));

        // spilling onto the heap does not change what the container reports
        for key in 6..12 {
            entries.borrow_mut().push((key, true));
        }
        assert!(entries.borrow().is_heap());
        assert_eq!(entries.size(), 8);
        assert_eq!(entries.key_at(7), 11);
    }
}
