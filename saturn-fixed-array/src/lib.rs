//! # Saturn Fixed Array
//!
//! A fixed-length, inline, contiguous array container for **Arch / Saturn programs** and other
//! allocation-free environments.
//!
//! [`FixedArray<T, N>`] always holds exactly `N` elements. Its length is part of the type, its
//! storage lives inside the value itself and it never grows, shrinks or reallocates.
//!
//! ## Features
//!
//! - **Checked access** – [`FixedArray::at`] / [`FixedArray::at_mut`] report
//!   [`FixedArrayError::OutOfRange`] to the caller
//! - **Unchecked access** – `array[i]` (panics on a bad index) and the `unsafe`
//!   [`FixedArray::get_unchecked`] for already-validated hot paths
//! - **Compile-time access** – [`get`] / [`get_mut`] / [`ConstIndex`] reject out-of-range
//!   indices at build time
//! - **Traversal** – forward, reverse and owned iteration in index order
//! - **Capacity, fill & equality** – `len`, `max_len`, `is_empty`, `fill`, `==`
//! - **[`fixed_array!`]** – list-initialization macro
//!
//! ## Access Paths
//!
//! | Path                 | Out-of-range index                    |
//! |----------------------|---------------------------------------|
//! | `at` / `at_mut`      | `Err(FixedArrayError::OutOfRange)`    |
//! | `array[i]`           | panic (caller bug)                    |
//! | `get_unchecked`      | undefined behaviour (`unsafe`)        |
//! | `get::<I>`           | compile error                         |
//! | `front` / `back`     | compile error when `N == 0`           |
//!
//! ## Quick Example
//!
//! ```rust
//! use saturn_fixed_array::{fixed_array, get, FixedArray, FixedArrayError};
//!
//! let mut numbers: FixedArray<i32, 4> = fixed_array![5, 2, 3, 4];
//!
//! assert_eq!(numbers.at(1), Ok(&2));
//! assert_eq!(
//!     numbers.at(4),
//!     Err(FixedArrayError::OutOfRange { index: 4, size: 4 })
//! );
//! assert_eq!(*get::<3, _>(&numbers), 4);
//!
//! let reversed: Vec<_> = numbers.iter_rev().copied().collect();
//! assert_eq!(reversed, vec![4, 3, 2, 5]);
//!
//! numbers.fill(7);
//! assert_eq!(numbers, [7, 7, 7, 7]);
//! ```
//!
//! ## Cargo Features
//!
//! - `bytemuck` (default) – `Pod` / `Zeroable` impls for zero-copy account storage
//! - `tracing` (default) – debug events for rejected checked accesses
//!
//! [`FixedArray<T, N>`]: FixedArray

pub mod error;
pub mod generic;
pub mod macros;

pub use error::{FixedArrayError, Result};
pub use generic::fixed_array::FixedArray;
pub use generic::get::{get, get_mut, ConstIndex};
