//! Compile-time indexed access.
//!
//! [`ConstIndex`] and the free functions [`get`] / [`get_mut`] take the index as
//! a const generic, so an index outside `[0, N)` is a build error rather than a
//! runtime failure.

use crate::generic::fixed_array::FixedArray;

/// Const-evaluated bounds checks.
///
/// The associated constants are evaluated when a function referencing them is
/// monomorphized, so a failing assertion stops compilation for that
/// instantiation only.
pub(crate) struct Assert<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> Assert<I, N> {
    /// `I < N`.
    pub(crate) const IN_BOUNDS: () = assert!(I < N, "index out of bounds for FixedArray");

    /// `I <= N`.
    pub(crate) const FITS: () = assert!(I <= N, "too many initializers for FixedArray");
}

/// Access to an element whose index is fixed at compile time.
///
/// Implemented for [`FixedArray`] and for plain `[T; N]` arrays.
///
/// # Examples
///
/// ```rust
/// use saturn_fixed_array::{fixed_array, ConstIndex};
///
/// let mut arr = fixed_array![1, 2, 3];
/// assert_eq!(*arr.get_const::<0>(), 1);
///
/// *arr.get_const_mut::<2>() = 30;
/// assert_eq!(arr, [1, 2, 30]);
/// ```
pub trait ConstIndex {
    /// Element type.
    type Item;

    /// Returns the element at `I`. Fails to compile if `I` is out of range.
    fn get_const<const I: usize>(&self) -> &Self::Item;

    /// Returns the element at `I` mutably. Fails to compile if `I` is out of range.
    fn get_const_mut<const I: usize>(&mut self) -> &mut Self::Item;
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Returns the element at the compile-time index `I`.
    ///
    /// Equivalent to `self[I]`, but an out-of-range `I` is rejected when the
    /// program is built.
    ///
    /// ```rust
    /// use saturn_fixed_array::fixed_array;
    ///
    /// let arr = fixed_array![1, 2, 3];
    /// assert_eq!(*arr.get_const::<1>(), 2);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use saturn_fixed_array::fixed_array;
    ///
    /// let arr = fixed_array![1, 2, 3];
    /// let _ = arr.get_const::<3>();
    /// ```
    pub fn get_const<const I: usize>(&self) -> &T {
        let () = Assert::<I, N>::IN_BOUNDS;
        &self.as_array()[I]
    }

    /// Mutable counterpart of [`get_const`](Self::get_const).
    pub fn get_const_mut<const I: usize>(&mut self) -> &mut T {
        let () = Assert::<I, N>::IN_BOUNDS;
        &mut self.as_mut_array()[I]
    }
}

impl<T, const N: usize> ConstIndex for FixedArray<T, N> {
    type Item = T;

    fn get_const<const I: usize>(&self) -> &T {
        FixedArray::get_const::<I>(self)
    }

    fn get_const_mut<const I: usize>(&mut self) -> &mut T {
        FixedArray::get_const_mut::<I>(self)
    }
}

impl<T, const N: usize> ConstIndex for [T; N] {
    type Item = T;

    fn get_const<const I: usize>(&self) -> &T {
        let () = Assert::<I, N>::IN_BOUNDS;
        &self[I]
    }

    fn get_const_mut<const I: usize>(&mut self) -> &mut T {
        let () = Assert::<I, N>::IN_BOUNDS;
        &mut self[I]
    }
}

/// Returns the element at the compile-time index `I` of `array`.
///
/// # Examples
///
/// ```rust
/// use saturn_fixed_array::{fixed_array, get};
///
/// let arr = fixed_array![1, 2, 3];
/// assert_eq!(*get::<0, _>(&arr), 1);
/// assert_eq!(*get::<1, _>(&arr), 2);
/// assert_eq!(*get::<2, _>(&arr), 3);
/// ```
///
/// ```rust,compile_fail
/// use saturn_fixed_array::{fixed_array, get};
///
/// let arr = fixed_array![1, 2, 3];
/// let _ = get::<5, _>(&arr);
/// ```
pub fn get<const I: usize, A>(array: &A) -> &A::Item
where
    A: ConstIndex + ?Sized,
{
    array.get_const::<I>()
}

/// Returns the element at the compile-time index `I` of `array` mutably.
pub fn get_mut<const I: usize, A>(array: &mut A) -> &mut A::Item
where
    A: ConstIndex + ?Sized,
{
    array.get_const_mut::<I>()
}
