use proptest::prelude::*;
use saturn_fixed_array::{get, ConstIndex, FixedArray, FixedArrayError};

const N: usize = 8;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256, ..ProptestConfig::default()
    })]

    #[test]
    fn at_agrees_with_index(elements in any::<[i64; N]>(), index in 0..N) {
        let array = FixedArray::new(elements);
        prop_assert_eq!(array.at(index), Ok(&array[index]));
        prop_assert!(std::ptr::eq(array.at(index).unwrap(), &array[index]));
    }

    #[test]
    fn at_rejects_every_index_past_the_end(elements in any::<[i64; N]>(), index in N..usize::MAX) {
        let mut array = FixedArray::new(elements);
        let expected = FixedArrayError::OutOfRange { index, size: N };
        prop_assert_eq!(array.at(index), Err(expected));
        prop_assert_eq!(array.at_mut(index).map(|v| *v), Err(expected));
    }

    #[test]
    fn capacity_ignores_contents(elements in any::<[u8; N]>(), value in any::<u8>()) {
        let mut array = FixedArray::new(elements);
        prop_assert_eq!(array.len(), N);
        prop_assert_eq!(array.max_len(), N);
        prop_assert!(!array.is_empty());

        array.fill(value);
        prop_assert_eq!(array.len(), N);
        prop_assert_eq!(array.max_len(), N);
    }

    #[test]
    fn write_then_read_round_trips(
        elements in any::<[i32; N]>(),
        index in 0..N,
        value in any::<i32>(),
    ) {
        let mut array = FixedArray::new(elements);
        array[index] = value;
        prop_assert_eq!(array[index], value);
        for (i, original) in elements.iter().enumerate() {
            if i != index {
                prop_assert_eq!(array[i], *original);
            }
        }
    }

    #[test]
    fn fill_sets_every_element(elements in any::<[u16; N]>(), value in any::<u16>()) {
        let mut array = FixedArray::new(elements);
        array.fill(value);
        prop_assert!(array.iter().all(|v| *v == value));
    }

    #[test]
    fn fill_with_strings(value in "[a-z]{0,12}") {
        let mut array: FixedArray<String, 5> = FixedArray::default();
        array.fill(value.clone());
        for i in 0..array.len() {
            prop_assert_eq!(&array[i], &value);
        }
    }

    #[test]
    fn equality_is_element_wise(elements in any::<[i32; N]>(), index in 0..N) {
        let a = FixedArray::new(elements);
        let b = FixedArray::new(elements);

        prop_assert_eq!(a, a);
        prop_assert_eq!(a, b);
        prop_assert_eq!(b, a);

        let mut c = b;
        c[index] = c[index].wrapping_add(1);
        prop_assert_ne!(a, c);
        prop_assert_ne!(c, a);
    }

    #[test]
    fn clone_compares_equal(elements in any::<[String; 4]>()) {
        let a = FixedArray::new(elements);
        let b = a.clone();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn data_walks_every_element(elements in any::<[u64; N]>()) {
        let array = FixedArray::new(elements);
        let ptr = array.data();
        for i in 0..N {
            // SAFETY: `i < N`, so the offset stays inside the array.
            let element = unsafe { ptr.add(i) };
            prop_assert!(std::ptr::eq(element, &array[i]));
        }
    }

    #[test]
    fn iteration_follows_index_order(elements in any::<[i32; N]>()) {
        let array = FixedArray::new(elements);

        let forward: Vec<i32> = array.iter().copied().collect();
        prop_assert_eq!(&forward[..], &elements[..]);

        let mut reversed = elements;
        reversed.reverse();
        let backward: Vec<i32> = array.iter_rev().copied().collect();
        prop_assert_eq!(&backward[..], &reversed[..]);

        let owned: Vec<i32> = array.into_iter().collect();
        prop_assert_eq!(owned, forward);
    }

    #[test]
    fn get_agrees_with_index(elements in any::<[i32; 3]>()) {
        let array = FixedArray::new(elements);
        prop_assert_eq!(*get::<0, _>(&array), array[0]);
        prop_assert_eq!(*get::<1, _>(&array), array[1]);
        prop_assert_eq!(*get::<2, _>(&array), array[2]);
        prop_assert_eq!(*elements.get_const::<2>(), array[2]);
    }

    #[test]
    fn ordering_matches_plain_arrays(a in any::<[u8; 4]>(), b in any::<[u8; 4]>()) {
        prop_assert_eq!(FixedArray::new(a).cmp(&FixedArray::new(b)), a.cmp(&b));
    }
}

#[test]
fn empty_matches_zero_length() {
    assert!(FixedArray::<i32, 0>::new([]).is_empty());
    assert!(!FixedArray::<i32, 1>::new([0]).is_empty());
    assert!(FixedArray::<i32, 0>::new([]).at(0).is_err());
}
