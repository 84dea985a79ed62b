//! Traversal of [`FixedArray`] in forward and reverse index order.

use core::iter::Rev;
use core::slice;

use crate::generic::fixed_array::FixedArray;

impl<T, const N: usize> FixedArray<T, N> {
    /// Returns an iterator over the elements in reverse index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_fixed_array::FixedArray;
    ///
    /// let numbers = FixedArray::new([5, 2, 3, 4]);
    /// let collected: Vec<_> = numbers.iter_rev().copied().collect();
    /// assert_eq!(collected, vec![4, 3, 2, 5]);
    /// ```
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Returns a mutable iterator over the elements in reverse index order.
    pub fn iter_rev_mut(&mut self) -> Rev<slice::IterMut<'_, T>> {
        self.iter_mut().rev()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_reverse_order() {
        let numbers = FixedArray::new([5, 2, 3, 4]);
        let forward: Vec<_> = numbers.iter().copied().collect();
        let reverse: Vec<_> = numbers.iter_rev().copied().collect();
        assert_eq!(forward, vec![5, 2, 3, 4]);
        assert_eq!(reverse, vec![4, 3, 2, 5]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let numbers = FixedArray::new([1, 2, 3]);
        let first: i32 = numbers.iter().sum();
        let second: i32 = numbers.iter().sum();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_access_and_exact_size() {
        let numbers = FixedArray::new([10, 20, 30, 40]);
        let mut iter = numbers.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.nth(2), Some(&30));
        assert_eq!(iter.next_back(), Some(&40));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_mut_and_rev_mut() {
        let mut numbers = FixedArray::new([1, 2, 3]);
        for n in &mut numbers {
            *n *= 10;
        }
        assert_eq!(numbers, [10, 20, 30]);

        let mut counter = 0;
        for n in numbers.iter_rev_mut() {
            counter += 1;
            *n += counter;
        }
        assert_eq!(numbers, [13, 22, 31]);
    }

    #[test]
    fn test_owned_into_iter_moves_elements() {
        let words = FixedArray::new(["Hello".to_string(), "World".to_string()]);
        let joined: Vec<String> = words.into_iter().collect();
        assert_eq!(joined, vec!["Hello", "World"]);
    }

    #[test]
    fn test_reference_into_iter() {
        let numbers = FixedArray::new([1u8, 2]);
        let mut seen = Vec::new();
        for n in &numbers {
            seen.push(*n);
        }
        assert_eq!(seen, numbers.as_slice());
    }
}
