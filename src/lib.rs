//! ## Intro
//!
//! A growable vector that keeps its **entire capacity default-initialized**,
//! built on a move-only heap-array owner.
//!
//! Where [`Vec`] leaves its spare capacity uninitialized, [`EagerVec`]
//! default-constructs every slot the moment a buffer is allocated. Removal
//! operations only move the logical length: the removed values stay parked
//! in the spare region until their slot is revived or the buffer is freed.
//! In exchange, every structural mutation (shifting for insert and erase,
//! moving elements across a reallocation) is ordinary slice manipulation
//! over an always-valid block, and the whole mutation layer is safe code.
//!
//! ## Containers
//!
//! ### `EagerVec`
//!
//! - **Vec-like** interface with amortized O(1) append
//! - **Always-initialized** capacity, requiring `T: Default` to grow
//! - **Checked** `at`/`insert`/`erase` returning [`OutOfRange`] instead of
//!   panicking
//!
//! ```
//! # use eagervec::{eagervec, EagerVec};
//! let mut vec = eagervec![1, 2, 3];
//! assert_eq!(vec.capacity(), 3);
//!
//! vec.push(4); // full: reallocates to 6 slots
//! assert_eq!(vec, [1, 2, 3, 4]);
//! assert_eq!(vec.capacity(), 6);
//! ```
//!
//! ### `HeapArray`
//!
//! The ownership primitive underneath: exclusively owns zero or one heap
//! block of default-constructed elements, transfers it by move only, and
//! frees it deterministically on drop.
//!
//! ```
//! # use eagervec::HeapArray;
//! let mut arr: HeapArray<u32> = HeapArray::new(3);
//! let block = arr.release().unwrap(); // the Box now owns the elements
//! assert_eq!(&*block, [0, 0, 0]);
//! assert!(arr.is_empty());
//! ```
//!
//! ### `Reserve`
//!
//! A capacity hint as a plain value, consumed by `EagerVec::from`:
//!
//! ```
//! # use eagervec::{EagerVec, Reserve};
//! let vec = EagerVec::<u8>::from(Reserve(64));
//! assert_eq!((vec.len(), vec.capacity()), (0, 64));
//! ```
//!
//! ## Comparison
//!
//! | Feature | EagerVec | Vec |
//! |---------|----------|-----|
//! | Spare capacity holds live values | ✓ | ✗ |
//! | Safe mutation layer | ✓ | ✗ |
//! | Works without `T: Default` | ✗ | ✓ |
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`. The `std` feature (on by
//! default) adds an `std::io::Write` adapter for `EagerVec<u8>`.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, [`EagerVec`] implements the
//! `Serialize` and `Deserialize` traits, encoding as an ordinary sequence.
//!
//! [`Vec`]: alloc::vec::Vec
#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;

pub mod heap_array;

pub mod eager_vec;

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "std")]
mod std_io;

pub use error::OutOfRange;

#[doc(inline)]
pub use heap_array::HeapArray;

#[doc(inline)]
pub use eager_vec::{EagerVec, IntoIter, Reserve};
