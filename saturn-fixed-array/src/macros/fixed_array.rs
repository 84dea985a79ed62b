/// Builds a [`FixedArray`](crate::FixedArray) from a list of values, with the
/// length inferred from the number of values.
///
/// `fixed_array![value; N]` repeats `value` `N` times and, like the array
/// repeat expression it expands to, requires `value` to be `Copy` or a constant.
///
/// # Examples
///
/// ```rust
/// use saturn_fixed_array::{fixed_array, FixedArray};
///
/// let data = fixed_array![4.56, 1.32, 7.23, 4.0];
/// assert_eq!(data.len(), 4);
///
/// let zeros: FixedArray<u8, 3> = fixed_array![0; 3];
/// assert_eq!(zeros, [0, 0, 0]);
///
/// let empty: FixedArray<u8, 0> = fixed_array![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fixed_array {
    ($($value:expr),* $(,)?) => {
        $crate::FixedArray::new([$($value),*])
    };
    ($value:expr; $len:expr) => {
        $crate::FixedArray::new([$value; $len])
    };
}
