//! The sparse container shapes and their iterators.
//!
//! Every shape is the same [`SparseIter`] state machine; the aliases only fix
//! what is yielded, and the constructors pin the container's key and value
//! types. The int-to-int shape yields bare values, all others yield
//! [`Entry`](crate::entry::Entry) records. Removal is positional for every
//! shape.
//!
//! The entry aliases all name the same type, so `SparseLongArrayIter::new`
//! accepts any container. Only the free functions below enforce a shape's
//! key and value types.

use crate::container::{IndexedContainer, IndexedContainerMut};
use crate::protected::{Replace, Unremovable};
use crate::sparse_iter::{Entries, SparseIter, Values};

/// `i32` keys to arbitrary values, yielding `Entry<i32, V>`.
pub type SparseArrayIter<'a, C, R = Unremovable> = SparseIter<'a, C, Entries, R>;

/// `i32` keys to `i32` values, yielding the bare value.
pub type SparseIntArrayIter<'a, C, R = Unremovable> = SparseIter<'a, C, Values, R>;

/// `i32` keys to `i64` values, yielding `Entry<i32, i64>`.
pub type SparseLongArrayIter<'a, C, R = Unremovable> = SparseIter<'a, C, Entries, R>;

/// `i32` keys to `bool` values, yielding `Entry<i32, bool>`.
pub type SparseBooleanArrayIter<'a, C, R = Unremovable> = SparseIter<'a, C, Entries, R>;

/// `i64` keys to arbitrary values, yielding `Entry<i64, V>`.
pub type LongSparseArrayIter<'a, C, R = Unremovable> = SparseIter<'a, C, Entries, R>;

pub fn sparse_array<C, V>(array: &C) -> SparseArrayIter<'_, C>
where
    C: IndexedContainer<Key = i32, Value = V> + ?Sized,
{
    SparseArrayIter::new(array)
}

pub fn sparse_array_with_replacement<C, V>(
    array: &C,
    replacement: V,
) -> SparseArrayIter<'_, C, Replace<V>>
where
    C: IndexedContainerMut<Key = i32, Value = V> + ?Sized,
    V: Clone,
{
    SparseArrayIter::with_replacement(array, replacement)
}

pub fn sparse_int_array<C>(array: &C) -> SparseIntArrayIter<'_, C>
where
    C: IndexedContainer<Key = i32, Value = i32> + ?Sized,
{
    SparseIntArrayIter::new(array)
}

pub fn sparse_int_array_with_replacement<C>(
    array: &C,
    replacement: i32,
) -> SparseIntArrayIter<'_, C, Replace<i32>>
where
    C: IndexedContainerMut<Key = i32, Value = i32> + ?Sized,
{
    SparseIntArrayIter::with_replacement(array, replacement)
}

pub fn sparse_long_array<C>(array: &C) -> SparseLongArrayIter<'_, C>
where
    C: IndexedContainer<Key = i32, Value = i64> + ?Sized,
{
    SparseLongArrayIter::new(array)
}

pub fn sparse_long_array_with_replacement<C>(
    array: &C,
    replacement: i64,
) -> SparseLongArrayIter<'_, C, Replace<i64>>
where
    C: IndexedContainerMut<Key = i32, Value = i64> + ?Sized,
{
    SparseLongArrayIter::with_replacement(array, replacement)
}

pub fn sparse_boolean_array<C>(array: &C) -> SparseBooleanArrayIter<'_, C>
where
    C: IndexedContainer<Key = i32, Value = bool> + ?Sized,
{
    SparseBooleanArrayIter::new(array)
}

pub fn sparse_boolean_array_with_replacement<C>(
    array: &C,
    replacement: bool,
) -> SparseBooleanArrayIter<'_, C, Replace<bool>>
where
    C: IndexedContainerMut<Key = i32, Value = bool> + ?Sized,
{
    SparseBooleanArrayIter::with_replacement(array, replacement)
}

pub fn long_sparse_array<C, V>(array: &C) -> LongSparseArrayIter<'_, C>
where
    C: IndexedContainer<Key = i64, Value = V> + ?Sized,
{
    LongSparseArrayIter::new(array)
}

pub fn long_sparse_array_with_replacement<C, V>(
    array: &C,
    replacement: V,
) -> LongSparseArrayIter<'_, C, Replace<V>>
where
    C: IndexedContainerMut<Key = i64, Value = V> + ?Sized,
    V: Clone,
{
    LongSparseArrayIter::with_replacement(array, replacement)
}
