use super::Rb;
use crate::traits::*;

#[test]
fn new() {
    let mut storage = [0i32; 3];
    let mut rb = Rb::new(&mut storage);
    let (mut prod, mut cons) = rb.split_ref();

    assert_eq!(cons.size(), 0);
    assert_eq!(cons.capacity(), 2);

    assert_eq!(prod.try_insert(1), Ok(()));
    assert_eq!(prod.try_insert(2), Ok(()));
    assert_eq!(cons.remove(), Ok(1));

    assert_eq!(prod.try_insert(3), Ok(()));
    assert_eq!(cons.remove(), Ok(2));
    assert_eq!(cons.remove(), Ok(3));
    assert!(cons.remove().is_err());
}

#[test]
fn smallest() {
    let mut storage = [0u8; 2];
    let mut rb = Rb::new(&mut storage);
    assert_eq!(rb.capacity(), 1);

    for i in 0..5 {
        assert_eq!(rb.try_insert(i), Ok(()));
        assert!(rb.is_full());
        assert!(rb.try_insert(0xff).is_err());
        assert_eq!(rb.remove(), Ok(i));
        assert!(rb.is_empty());
    }
}

#[test]
#[should_panic]
fn no_slots() {
    let mut storage: [i32; 0] = [];
    let _ = Rb::new(&mut storage);
}

#[test]
#[should_panic]
fn single_slot() {
    let mut storage = [0i32; 1];
    let _ = Rb::new(&mut storage);
}

#[test]
fn from_slice() {
    let mut storage = [0i32; 4];
    let mut rb = Rb::from(&mut storage[..]);
    assert_eq!(rb.capacity(), 3);
    assert_eq!(rb.try_insert(5), Ok(()));
    assert_eq!(rb.remove(), Ok(5));
}

#[test]
fn storage_is_not_touched() {
    let mut storage = [7i32; 4];
    let rb = Rb::new(&mut storage);
    assert!(rb.is_empty());
    let (storage, read, write) = rb.into_raw_parts();
    assert_eq!(storage, &[7, 7, 7, 7]);
    assert_eq!((read, write), (0, 0));
}

#[test]
fn raw_parts() {
    let mut storage = [1, 2, 3, 4, 5];
    let mut rb = Rb::from_raw_parts(&mut storage, 3, 1);
    assert_eq!(rb.size(), 3);
    assert!(rb.iter().eq([4, 5, 1]));

    rb.try_insert(6).unwrap();
    let (storage, read, write) = rb.into_raw_parts();
    assert_eq!(storage, &[1, 6, 3, 4, 5]);
    assert_eq!((read, write), (3, 2));

    let rb = Rb::from_raw_parts(storage, read, write);
    assert!(rb.is_full());
}

#[test]
#[should_panic]
fn raw_parts_out_of_bounds() {
    let mut storage = [0i32; 4];
    let _ = Rb::from_raw_parts(&mut storage, 0, 4);
}
