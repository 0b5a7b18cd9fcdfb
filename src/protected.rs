//! The protected iterator contract.
//!
//! A [`ProtectedIterator`] is a forward-only [`Iterator`] with an explicit
//! `has_next`/`try_next` pair and a restricted `remove`: it never shrinks the
//! container it walks. At most it overwrites the slot of the element last
//! returned with a fixed replacement, and only when it was built with a
//! [`Replace`] policy.

use tracing::trace;

use crate::container::IndexedContainerMut;
use crate::error::{Error, Result};

pub trait ProtectedIterator: Iterator {
    /// Whether a call to [`try_next`](ProtectedIterator::try_next) would
    /// currently succeed. Does not advance the iterator.
    fn has_next(&self) -> bool;

    /// Advances by exactly one element and returns it, or fails with
    /// [`Error::Exhausted`] without moving when there is none.
    fn try_next(&mut self) -> Result<Self::Item>;

    /// Retracts the element most recently returned by `try_next`.
    fn remove(&mut self) -> Result<()>;
}

/// How a sparse iterator answers `remove`. Fixed at construction.
pub trait RemovalPolicy<C: ?Sized> {
    /// `position` is the ordinal of the element last produced, `None` before
    /// the first one.
    fn retract(&self, container: &C, position: Option<usize>) -> Result<()>;
}

/// Removal is never supported, whatever the iterator's state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unremovable;

impl<C: ?Sized> RemovalPolicy<C> for Unremovable {
    fn retract(&self, _container: &C, _position: Option<usize>) -> Result<()> {
        Err(Error::Unsupported("SparseIter"))
    }
}

/// Removal overwrites the current slot with the same replacement value on
/// every call. The container keeps its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replace<V>(V);

impl<V> Replace<V> {
    pub fn new(replacement: V) -> Replace<V> {
        Replace(replacement)
    }

    pub fn replacement(&self) -> &V {
        &self.0
    }
}

impl<C> RemovalPolicy<C> for Replace<C::Value>
where
    C: IndexedContainerMut + ?Sized,
    C::Value: Clone,
{
    fn retract(&self, container: &C, position: Option<usize>) -> Result<()> {
        let size = container.size();
        match position {
            Some(position) if position < size => {
                trace!(position, "replacing value");
                container.set_value_at(position, self.0.clone());
                Ok(())
            }
            _ => Err(Error::NoCurrentElement { position, size }),
        }
    }
}

/// Wraps a plain iterator as a [`ProtectedIterator`] whose `remove` is
/// always unsupported.
///
/// One element is pulled ahead of the caller so that `has_next` can answer
/// through a shared reference: the first element is taken from `inner` at
/// construction, and each `try_next` pulls the one after. Any side effects of
/// the wrapped iterator therefore run one step early.
#[derive(Debug, Clone)]
pub struct Protected<I: Iterator> {
    inner: I,
    lookahead: Option<I::Item>,
}

impl<I: Iterator> Protected<I> {
    pub fn new(mut inner: I) -> Protected<I> {
        let lookahead = inner.next();
        Protected { inner, lookahead }
    }
}

pub fn protect<I: IntoIterator>(iter: I) -> Protected<I::IntoIter> {
    Protected::new(iter.into_iter())
}

impl<I: Iterator> Iterator for Protected<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.lookahead.is_some());
        let (lower, upper) = self.inner.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> ProtectedIterator for Protected<I> {
    fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        let item = self.lookahead.take().ok_or(Error::Exhausted)?;
        self.lookahead = self.inner.next();
        Ok(item)
    }

    fn remove(&mut self) -> Result<()> {
        Err(Error::Unsupported("Protected"))
    }
}
