use std::marker::PhantomData;

use tracing::trace;

use crate::container::{IndexedContainer, IndexedContainerMut};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::protected::{ProtectedIterator, RemovalPolicy, Replace, Unremovable};

/// What a [`SparseIter`] yields for the slot at a position.
pub trait Project<C: ?Sized> {
    type Item;

    fn project(container: &C, position: usize) -> Self::Item;
}

/// Yields an [`Entry`] of the key and value at each position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entries;

impl<C: IndexedContainer + ?Sized> Project<C> for Entries {
    type Item = Entry<C::Key, C::Value>;

    fn project(container: &C, position: usize) -> Self::Item {
        Entry::new(container.key_at(position), container.value_at(position))
    }
}

/// Yields only the value at each position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Values;

impl<C: IndexedContainer + ?Sized> Project<C> for Values {
    type Item = C::Value;

    fn project(container: &C, position: usize) -> Self::Item {
        container.value_at(position)
    }
}

/// Forward-only iterator over an [`IndexedContainer`].
///
/// The iterator holds a shared reference to the container and re-reads its
/// size, keys and values on every call; nothing is snapshotted at
/// construction. Elements appended to the container while iterating are
/// therefore produced, and an exhausted iterator resumes if the container
/// grows again, which is why `SparseIter` is not a `FusedIterator`.
///
/// `P` selects what is yielded ([`Entries`] or [`Values`]) and `R` how
/// `remove` behaves ([`Unremovable`] or [`Replace`]).
#[derive(Debug)]
pub struct SparseIter<'a, C: ?Sized, P, R = Unremovable> {
    container: &'a C,
    // Number of elements produced so far. The current position is
    // `cursor - 1`, so 0 means "before the first element".
    cursor: usize,
    removal: R,
    projection: PhantomData<P>,
}

impl<'a, C, P> SparseIter<'a, C, P, Unremovable>
where
    C: IndexedContainer + ?Sized,
{
    pub fn new(container: &'a C) -> Self {
        Self::with_policy(container, Unremovable)
    }
}

impl<'a, C, P> SparseIter<'a, C, P, Replace<C::Value>>
where
    C: IndexedContainerMut + ?Sized,
    C::Value: Clone,
{
    /// Creates an iterator whose `remove` overwrites the current slot with
    /// `replacement`.
    pub fn with_replacement(container: &'a C, replacement: C::Value) -> Self {
        Self::with_policy(container, Replace::new(replacement))
    }
}

impl<'a, C, P, R> SparseIter<'a, C, P, R>
where
    C: IndexedContainer + ?Sized,
    R: RemovalPolicy<C>,
{
    pub fn with_policy(container: &'a C, removal: R) -> Self {
        trace!(size = container.size(), "creating sparse iterator");
        SparseIter {
            container,
            cursor: 0,
            removal,
            projection: PhantomData,
        }
    }

    /// Like [`with_policy`](SparseIter::with_policy), but rejects an absent
    /// container with [`Error::InvalidArgument`].
    pub fn try_new(container: Option<&'a C>, removal: R) -> Result<Self> {
        let container = container
            .ok_or_else(|| Error::InvalidArgument("container is absent".to_string()))?;
        Ok(Self::with_policy(container, removal))
    }

    /// Ordinal of the element last produced, `None` before the first one.
    pub fn current(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    pub fn removal(&self) -> &R {
        &self.removal
    }
}

impl<'a, C, P> TryFrom<Option<&'a C>> for SparseIter<'a, C, P, Unremovable>
where
    C: IndexedContainer + ?Sized,
{
    type Error = Error;

    fn try_from(container: Option<&'a C>) -> Result<Self> {
        Self::try_new(container, Unremovable)
    }
}

impl<'a, C, P, R> Iterator for SparseIter<'a, C, P, R>
where
    C: IndexedContainer + ?Sized,
    P: Project<C>,
    R: RemovalPolicy<C>,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<'a, C, P, R> ProtectedIterator for SparseIter<'a, C, P, R>
where
    C: IndexedContainer + ?Sized,
    P: Project<C>,
    R: RemovalPolicy<C>,
{
    fn has_next(&self) -> bool {
        self.cursor < self.container.size()
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        let position = self.cursor;
        self.cursor += 1;
        Ok(P::project(self.container, position))
    }

    fn remove(&mut self) -> Result<()> {
        self.removal.retract(self.container, self.current())
    }
}
