pub mod container;
pub mod entry;
pub mod error;
pub mod pair_iter;
pub mod protected;
pub mod shapes;
pub mod sparse_iter;

pub use container::{IndexedContainer, IndexedContainerMut};
pub use entry::Entry;
pub use error::{Error, Result};
pub use pair_iter::PairIter;
pub use protected::{protect, Protected, ProtectedIterator, RemovalPolicy, Replace, Unremovable};
pub use shapes::{
    long_sparse_array, long_sparse_array_with_replacement, sparse_array,
    sparse_array_with_replacement, sparse_boolean_array, sparse_boolean_array_with_replacement,
    sparse_int_array, sparse_int_array_with_replacement, sparse_long_array,
    sparse_long_array_with_replacement, LongSparseArrayIter, SparseArrayIter,
    SparseBooleanArrayIter, SparseIntArrayIter, SparseLongArrayIter,
};
pub use sparse_iter::{Entries, Project, SparseIter, Values};
