//! Fixed-length array container with inline storage.
//!
//! This module provides [`FixedArray`], a value type holding exactly `N` elements
//! of `T` in a contiguous inline buffer. Its length is part of the type and never
//! changes, so every index in `[0, N)` always holds a valid element.

use core::array::TryFromSliceError;
use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice::{self, SliceIndex};

use crate::error::{FixedArrayError, Result};
use crate::generic::get::Assert;

/// A fixed-length sequence of exactly `N` values of type `T`.
///
/// `FixedArray` is a transparent wrapper around `[T; N]`: the elements are stored
/// inline, with no indirection and no heap buffer. It offers two access paths:
///
/// * [`at`](Self::at) / [`at_mut`](Self::at_mut) check the index and report
///   [`FixedArrayError::OutOfRange`] to the caller.
/// * `array[i]` and the `unsafe` [`get_unchecked`](Self::get_unchecked) treat an
///   out-of-range index as a caller bug (a panic, or undefined behaviour for the
///   `unsafe` variant) and never produce an error value.
///
/// # Type Parameters
///
/// * `T` - The element type. Any `Sized` type is accepted; Rust values are
///   always movable, so no further bound is required to instantiate the type.
/// * `N` - The number of elements (compile-time constant). `N == 0` is a valid
///   instantiation, but [`front`](Self::front) and [`back`](Self::back) do not
///   compile for it.
///
/// # Examples
///
/// ```rust
/// use saturn_fixed_array::{fixed_array, FixedArray, FixedArrayError};
///
/// let mut array: FixedArray<u32, 3> = fixed_array![5, 2, 6];
///
/// assert_eq!(array.at(0), Ok(&5));
/// assert_eq!(
///     array.at(4),
///     Err(FixedArrayError::OutOfRange { index: 4, size: 3 })
/// );
///
/// array[1] = 7;
/// assert_eq!(array.as_slice(), &[5, 7, 6]);
/// ```
///
/// # Drop Order
///
/// Elements are dropped in ascending index order, the same order the
/// underlying `[T; N]` uses.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedArray<T, const N: usize> {
    elements: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Number of elements held by every value of this type.
    pub const CAPACITY: usize = N;

    /// Creates a `FixedArray` from exactly `N` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let array = FixedArray::new(["Hello", "World", "!"]);
    /// assert_eq!(array[2], "!");
    /// ```
    pub const fn new(elements: [T; N]) -> Self {
        Self { elements }
    }

    /// Creates a `FixedArray` whose element at index `i` is `f(i)`.
    ///
    /// `f` is called in ascending index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let squares: FixedArray<usize, 4> = FixedArray::from_fn(|i| i * i);
    /// assert_eq!(squares.as_slice(), &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(core::array::from_fn(f))
    }

    /// Creates a `FixedArray` from the first `M` values, default-initializing the
    /// remaining `N - M` elements.
    ///
    /// Supplying more values than the array holds (`M > N`) is rejected at
    /// compile time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let array: FixedArray<i32, 5> = FixedArray::from_prefix([1, 2]);
    /// assert_eq!(array.as_slice(), &[1, 2, 0, 0, 0]);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let array: FixedArray<i32, 2> = FixedArray::from_prefix([1, 2, 3]);
    /// ```
    pub fn from_prefix<const M: usize>(values: [T; M]) -> Self
    where
        T: Default,
    {
        let () = Assert::<M, N>::FITS;
        let mut values = values.into_iter();
        Self::from_fn(|_| values.next().unwrap_or_default())
    }

    /// Creates a `FixedArray` from an iterator, taking up to `N` items and
    /// default-initializing any element the iterator did not reach.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let long: FixedArray<u32, 3> = FixedArray::from_iter_padded(10..);
    /// assert_eq!(long.as_slice(), &[10, 11, 12]);
    ///
    /// let short: FixedArray<u32, 3> = FixedArray::from_iter_padded([7]);
    /// assert_eq!(short.as_slice(), &[7, 0, 0]);
    /// ```
    pub fn from_iter_padded<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Default,
    {
        let mut iter = iter.into_iter().take(N);
        Self::from_fn(|_| iter.next().unwrap_or_default())
    }

    /// Consumes the array and returns the backing `[T; N]`.
    pub fn into_inner(self) -> [T; N] {
        self.elements
    }

    /// Returns a reference to the element at `index`, checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::OutOfRange`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::{FixedArray, FixedArrayError};
    ///
    /// let data = FixedArray::new([4.56, 1.32, 7.23, 4.0]);
    /// assert_eq!(data.at(1), Ok(&1.32));
    /// assert!(matches!(data.at(5), Err(FixedArrayError::OutOfRange { .. })));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.elements
            .get(index)
            .ok_or_else(|| out_of_range(index, N))
    }

    /// Returns a mutable reference to the element at `index`, checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FixedArrayError::OutOfRange`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let mut data = FixedArray::new([1, 2, 3]);
    /// *data.at_mut(2).unwrap() = 30;
    /// assert_eq!(data.as_slice(), &[1, 2, 30]);
    /// assert!(data.at_mut(3).is_err());
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.elements
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, N))
    }

    /// Returns a reference to the element at `index` without any bounds check.
    ///
    /// This is the hot-path sibling of [`at`](Self::at) for callers that have
    /// already validated the index. Debug builds still assert the precondition.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Calling this with an out-of-range index is
    /// undefined behaviour, even if the returned reference is never used.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "get_unchecked: index {index} >= size {N}");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.elements.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without any bounds
    /// check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "get_unchecked_mut: index {index} >= size {N}");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.elements.get_unchecked_mut(index) }
    }

    /// Returns the first element.
    ///
    /// Does not compile for `N == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::fixed_array;
    ///
    /// let letters = fixed_array!['a', 'b', 'c', 'd', 'e', 'f'];
    /// assert_eq!(*letters.front(), 'a');
    /// ```
    ///
    /// ```rust,compile_fail
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let empty: FixedArray<u8, 0> = FixedArray::new([]);
    /// let _ = empty.front();
    /// ```
    pub fn front(&self) -> &T {
        let () = Assert::<0, N>::IN_BOUNDS;
        &self.elements[0]
    }

    /// Returns the first element mutably. Does not compile for `N == 0`.
    pub fn front_mut(&mut self) -> &mut T {
        let () = Assert::<0, N>::IN_BOUNDS;
        &mut self.elements[0]
    }

    /// Returns the last element.
    ///
    /// Does not compile for `N == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::fixed_array;
    ///
    /// let letters = fixed_array!['a', 'b', 'c', 'd', 'e', 'f'];
    /// assert_eq!(*letters.back(), 'f');
    /// ```
    ///
    /// ```rust,compile_fail
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let empty: FixedArray<u8, 0> = FixedArray::new([]);
    /// let _ = empty.back();
    /// ```
    pub fn back(&self) -> &T {
        let () = Assert::<0, N>::IN_BOUNDS;
        &self.elements[N - 1]
    }

    /// Returns the last element mutably. Does not compile for `N == 0`.
    pub fn back_mut(&mut self) -> &mut T {
        let () = Assert::<0, N>::IN_BOUNDS;
        &mut self.elements[N - 1]
    }

    /// Returns a raw pointer to the first element of the contiguous storage.
    ///
    /// For every `i < N`, `data().add(i)` points at `self[i]`. When `N == 0` the
    /// pointer is non-null and aligned but must not be dereferenced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let elems = FixedArray::new([2, 5, 8, 9]);
    /// assert!(core::ptr::eq(elems.data(), &elems[0]));
    /// ```
    pub const fn data(&self) -> *const T {
        self.elements.as_ptr()
    }

    /// Returns a raw mutable pointer to the first element of the storage.
    pub fn data_mut(&mut self) -> *mut T {
        self.elements.as_mut_ptr()
    }

    /// Returns the elements as a slice of length `N`.
    pub const fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the elements as a mutable slice of length `N`.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Returns a reference to the backing `[T; N]`.
    pub const fn as_array(&self) -> &[T; N] {
        &self.elements
    }

    /// Returns a mutable reference to the backing `[T; N]`.
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.elements
    }

    /// Returns an iterator over the elements in index order.
    ///
    /// The iterator is double-ended and exact-sized; calling `.rev()` on it is
    /// equivalent to [`iter_rev`](Self::iter_rev).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let numbers = FixedArray::new([5, 2, 3, 4]);
    /// let collected: Vec<_> = numbers.iter().copied().collect();
    /// assert_eq!(collected, vec![5, 2, 3, 4]);
    /// ```
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a mutable iterator over the elements in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Returns `true` if the array holds no elements, i.e. `N == 0`.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the number of elements, which is always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the maximum number of elements, which is always `N`.
    pub const fn max_len(&self) -> usize {
        N
    }

    /// Assigns a clone of `value` to every element, in ascending index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let mut letters: FixedArray<char, 3> = FixedArray::default();
    /// letters.fill('b');
    /// assert_eq!(letters.as_slice(), &['b', 'b', 'b']);
    /// ```
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.elements.fill(value);
    }

    /// Assigns `f()` to every element, in ascending index order.
    pub fn fill_with<F>(&mut self, f: F)
    where
        F: FnMut() -> T,
    {
        self.elements.fill_with(f);
    }

    /// Exchanges the contents of `self` and `other` element by element.
    pub fn swap(&mut self, other: &mut Self) {
        self.elements.swap_with_slice(&mut other.elements);
    }
}

#[cold]
fn out_of_range(index: usize, size: usize) -> FixedArrayError {
    #[cfg(feature = "tracing")]
    tracing::debug!(index, size, "rejected out-of-range checked access");
    FixedArrayError::OutOfRange { index, size }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

// Indexing panics on an out-of-range index instead of reporting an error.
impl<T, I, const N: usize> Index<I> for FixedArray<T, N>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.elements.as_slice()[index]
    }
}

impl<T, I, const N: usize> IndexMut<I> for FixedArray<T, N>
where
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.elements.as_mut_slice()[index]
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for FixedArray<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.elements[..] == other[..]
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for FixedArray<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.elements[..] == *other
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    fn from(array: FixedArray<T, N>) -> Self {
        array.into_inner()
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = TryFromSliceError;

    fn try_from(slice: &[T]) -> core::result::Result<Self, Self::Error> {
        <[T; N]>::try_from(slice).map(Self::new)
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T; N]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T; N] {
        self.as_array()
    }
}

impl<T, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// SAFETY: `FixedArray` is `repr(transparent)` over `[T; N]`, so the all-zero bit
// pattern is valid whenever it is valid for `T`.
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for FixedArray<T, N> {}

// SAFETY: `repr(transparent)` over `[T; N]` with `T: Pod` has no padding and no
// invalid bit patterns.
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for FixedArray<T, N> {}
