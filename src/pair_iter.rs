use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::protected::ProtectedIterator;

/// Iterates over the two elements of a `(first, second)` pair, in order.
///
/// The pair is never written to; `remove` always fails.
#[derive(Debug, Clone)]
pub struct PairIter<'a, T> {
    pair: &'a (T, T),
    cursor: usize,
}

impl<'a, T> PairIter<'a, T> {
    pub fn new(pair: &'a (T, T)) -> PairIter<'a, T> {
        PairIter { pair, cursor: 0 }
    }

    pub fn try_new(pair: Option<&'a (T, T)>) -> Result<PairIter<'a, T>> {
        pair.map(PairIter::new)
            .ok_or_else(|| Error::InvalidArgument("pair is absent".to_string()))
    }
}

impl<'a, T> TryFrom<Option<&'a (T, T)>> for PairIter<'a, T> {
    type Error = Error;

    fn try_from(pair: Option<&'a (T, T)>) -> Result<Self> {
        PairIter::try_new(pair)
    }
}

impl<'a, T> Iterator for PairIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 2 - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for PairIter<'a, T> {}

impl<'a, T> FusedIterator for PairIter<'a, T> {}

impl<'a, T> ProtectedIterator for PairIter<'a, T> {
    fn has_next(&self) -> bool {
        self.cursor < 2
    }

    fn try_next(&mut self) -> Result<Self::Item> {
        let element = match self.cursor {
            0 => &self.pair.0,
            1 => &self.pair.1,
            _ => return Err(Error::Exhausted),
        };
        self.cursor += 1;
        Ok(element)
    }

    fn remove(&mut self) -> Result<()> {
        Err(Error::Unsupported("PairIter"))
    }
}
