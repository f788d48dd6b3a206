//! # Vector integration tests
//!
//! Written completely externally from the crate: all code in this module could
//! be written by a user of the public API.
use uppertri::{BoundedVector, Error, MAX_VECTOR_SIZE};

#[test]
fn can_create_vector_with_positive_length() {
    assert!(BoundedVector::<i32>::new(5).is_ok());
}

#[test]
fn cannot_create_too_large_vector() {
    assert_eq!(
        BoundedVector::<i32>::new(MAX_VECTOR_SIZE + 1),
        Err(Error::InvalidSize { size: MAX_VECTOR_SIZE + 1, maximum: MAX_VECTOR_SIZE }),
    );
}

#[test]
fn cannot_create_vector_without_elements() {
    assert_eq!(
        BoundedVector::<i32>::new(0),
        Err(Error::InvalidSize { size: 0, maximum: MAX_VECTOR_SIZE }),
    );
}

#[test]
fn cannot_create_vector_with_unrepresentable_start_index() {
    assert_eq!(
        BoundedVector::<i32>::with_start(5, usize::MAX - 3),
        Err(Error::InvalidStartIndex { start_index: usize::MAX - 3, len: 5 }),
    );
}

#[test]
fn can_get_size() {
    let v = BoundedVector::<i32>::new(4).unwrap();

    assert_eq!(v.len(), 4);
}

#[test]
fn can_get_start_index() {
    let v = BoundedVector::<i32>::with_start(4, 2).unwrap();

    assert_eq!(v.start_index(), 2);
}

#[test]
fn can_set_and_get_element() {
    let mut v = BoundedVector::<i32>::new(4).unwrap();
    v[0] = 4;

    assert_eq!(v[0], 4);
    assert_eq!(v.get(0), Ok(&4));
}

#[test]
fn set_rejects_index_below_start() {
    let mut v = BoundedVector::<i32>::with_start(4, 2).unwrap();

    assert_eq!(
        v.set(1, 100),
        Err(Error::IndexOutOfRange { index: 1, start: 2, end: 6 }),
    );
}

#[test]
fn set_rejects_index_past_end() {
    let mut v = BoundedVector::<i32>::new(4).unwrap();

    assert_eq!(
        v.set(4, 100),
        Err(Error::IndexOutOfRange { index: 4, start: 0, end: 4 }),
    );
    assert_eq!(
        v.set(5, 100),
        Err(Error::IndexOutOfRange { index: 5, start: 0, end: 4 }),
    );
}

#[test]
fn rejected_set_leaves_contents_unchanged() {
    let mut v = BoundedVector::from_data(vec![1, 2, 3], 0).unwrap();
    let before = v.clone();
    let _ = v.set(3, 100);

    assert_eq!(v, before);
}

#[test]
#[should_panic]
fn indexing_past_end_panics() {
    let v = BoundedVector::<i32>::new(4).unwrap();

    let _ = v[5];
}

#[test]
#[should_panic]
fn writing_below_start_panics() {
    let mut v = BoundedVector::<i32>::with_start(4, 2).unwrap();

    v[1] = 100;
}

#[test]
fn clone_is_equal_to_source() {
    let mut v = BoundedVector::<i32>::new(3).unwrap();
    for i in 0..3 {
        v[i] = i as i32;
    }

    assert_eq!(v.clone(), v);
}

#[test]
fn clone_has_its_own_storage() {
    let mut v = BoundedVector::<i32>::new(3).unwrap();
    for i in 0..3 {
        v[i] = i as i32;
    }
    let mut c = v.clone();
    c[0] = 17;

    assert_eq!(v[0], 0);

    drop(v);

    assert_eq!(c.len(), 3);
    assert_eq!(c[0], 17);
}

#[test]
fn assignment_replaces_shape_and_contents() {
    let mut source = BoundedVector::<i32>::with_start(10, 1).unwrap();
    for i in 1..11 {
        source[i] = i as i32;
    }
    let mut target = BoundedVector::<i32>::new(5).unwrap();
    target.clone_from(&source);

    assert_eq!(target.len(), 10);
    assert_eq!(target.start_index(), 1);
    assert_eq!(target, source);
}

#[test]
fn equal_vectors_compare_equal() {
    let left = BoundedVector::constant(1, 3).unwrap();
    let right = BoundedVector::constant(1, 3).unwrap();

    assert_eq!(left, right);
}

#[test]
fn vector_equals_itself() {
    let mut v = BoundedVector::<i32>::new(3).unwrap();
    for i in 0..3 {
        v[i] = i as i32;
    }

    assert_eq!(v, v);
}

#[test]
fn vectors_of_different_size_are_not_equal() {
    let left = BoundedVector::from_data(vec![0, 1, 2], 0).unwrap();
    let right = BoundedVector::from_data(vec![0, 1, 2, 3, 4], 0).unwrap();

    assert_ne!(left, right);
}

#[test]
fn can_add_scalar_to_vector() {
    let s = BoundedVector::<i32>::new(3).unwrap() + 35;

    assert_eq!(s, BoundedVector::from_data(vec![35, 35, 35], 0).unwrap());
}

#[test]
fn can_subtract_scalar_from_vector() {
    let s = BoundedVector::constant(5, 3).unwrap() - 3;

    assert_eq!(s, BoundedVector::constant(2, 3).unwrap());
}

#[test]
fn can_multiply_vector_by_scalar() {
    let s = BoundedVector::constant(2, 3).unwrap() * 2;

    assert_eq!(s, BoundedVector::constant(4, 3).unwrap());
}

#[test]
fn scalar_operations_preserve_the_start_index() {
    let v = BoundedVector::from_data(vec![1, 2], 3).unwrap() + 1;

    assert_eq!(v.start_index(), 3);
    assert_eq!(v[3], 2);
    assert_eq!(v[4], 3);
}

#[test]
fn can_add_vectors_of_equal_size() {
    let left = BoundedVector::constant(1, 3).unwrap();
    let right = BoundedVector::constant(2, 3).unwrap();

    assert_eq!(left.try_add(&right), Ok(BoundedVector::constant(3, 3).unwrap()));
}

#[test]
fn cannot_add_vectors_of_different_size() {
    let left = BoundedVector::<i32>::new(5).unwrap();
    let right = BoundedVector::<i32>::new(10).unwrap();

    assert_eq!(left.try_add(&right), Err(Error::SizeMismatch { left: 5, right: 10 }));
}

#[test]
fn can_subtract_vectors_of_equal_size() {
    let left = BoundedVector::constant(2, 3).unwrap();
    let right = BoundedVector::constant(1, 3).unwrap();

    assert_eq!(left.try_sub(&right), Ok(BoundedVector::constant(1, 3).unwrap()));
}

#[test]
fn cannot_subtract_vectors_of_different_size() {
    let left = BoundedVector::<i32>::new(5).unwrap();
    let right = BoundedVector::<i32>::new(10).unwrap();

    assert_eq!(left.try_sub(&right), Err(Error::SizeMismatch { left: 5, right: 10 }));
}

#[test]
fn inner_product_of_vectors_of_equal_size() {
    let left = BoundedVector::constant(1, 3).unwrap();
    let right = BoundedVector::constant(2, 3).unwrap();

    assert_eq!(left.inner_product(&right), Ok(6));
}

#[test]
fn cannot_take_inner_product_of_vectors_of_different_size() {
    let left = BoundedVector::<i32>::new(3).unwrap();
    let right = BoundedVector::<i32>::new(4).unwrap();

    assert_eq!(left.inner_product(&right), Err(Error::SizeMismatch { left: 3, right: 4 }));
}
