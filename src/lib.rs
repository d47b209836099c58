//! Growable arrays with fixed inline storage that spill to the heap.
//!
//! [`SpillVec<T, N>`] keeps up to `N` elements inside the container itself
//! and only allocates once that inline capacity is exceeded. The spill is
//! one-directional: a vector that has moved to the heap never returns to
//! its inline storage, so capacity is non-decreasing for the lifetime of
//! the value.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub(crate) mod buffer;

pub(crate) mod error;

pub mod vec;

pub use {
    self::error::{InsertionError, StorageError},
    self::vec::SpillVec,
};
