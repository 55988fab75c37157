use super::Rb;
use crate::traits::*;

#[test]
fn iter() {
    let mut storage = [0i32; 3];
    let mut rb = Rb::new(&mut storage);
    let (mut prod, mut cons) = rb.split_ref();

    prod.try_insert(10).unwrap();
    prod.try_insert(20).unwrap();

    let sum: i32 = cons.iter().sum();

    let first = cons.remove().unwrap();
    let second = cons.remove().unwrap();

    assert_eq!(sum, first + second);
}

#[test]
fn iter_len() {
    let mut storage = [0i32; 5];
    let mut rb = Rb::new(&mut storage);
    rb.insert_slice(&[1, 2, 3, 4]);
    rb.skip(3);
    rb.insert_slice(&[5, 6]);

    let mut iter = rb.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(5));
    assert_eq!(iter.next(), Some(6));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_does_not_remove() {
    let mut storage = [0i32; 4];
    let mut rb = Rb::new(&mut storage);
    rb.insert_slice(&[1, 2, 3]);

    assert!(rb.iter().eq([1, 2, 3]));
    assert!(rb.iter().eq([1, 2, 3]));
    assert_eq!(rb.size(), 3);
}

#[test]
fn iter_snapshot() {
    let mut storage = [0i32; 4];
    let mut rb = Rb::new(&mut storage);
    let (mut prod, cons) = rb.split_ref();

    prod.try_insert(1).unwrap();
    let iter = cons.iter();
    prod.try_insert(2).unwrap();

    assert!(iter.eq([1]));
}

#[test]
fn pop_iter() {
    let mut storage = [0i32; 4];
    let mut rb = Rb::new(&mut storage);
    let (mut prod, mut cons) = rb.split_ref();

    prod.try_insert(0).unwrap();
    prod.try_insert(1).unwrap();
    for (i, v) in cons.pop_iter().enumerate() {
        assert_eq!(i as i32, v);
    }

    prod.try_insert(2).unwrap();
    prod.try_insert(3).unwrap();
    for (i, v) in cons.pop_iter().enumerate() {
        assert_eq!(i as i32 + 2, v);
    }
    assert!(prod.is_empty());
}

#[test]
fn insert_pop_iter_partial() {
    let mut storage = [0i32; 5];
    let mut rb = Rb::new(&mut storage);
    let (mut prod, mut cons) = rb.split_ref();

    prod.try_insert(0).unwrap();
    prod.try_insert(1).unwrap();
    prod.try_insert(2).unwrap();
    for (i, v) in (0..2).zip(cons.pop_iter()) {
        assert_eq!(i, v);
    }

    prod.try_insert(3).unwrap();
    prod.try_insert(4).unwrap();
    prod.try_insert(5).unwrap();
    for (i, v) in (2..5).zip(cons.pop_iter()) {
        assert_eq!(i, v);
    }
    assert_eq!(cons.remove(), Ok(5));
    assert!(prod.is_empty());
}

#[test]
fn insert_iter() {
    let mut storage = [0i32; 4];
    let mut rb = Rb::new(&mut storage);
    let (mut prod, mut cons) = rb.split_ref();

    let mut iter = 0..10;
    assert_eq!(prod.insert_iter(&mut iter), 3);
    assert_eq!(iter.next(), Some(3));

    assert_eq!(cons.remove(), Ok(0));
    assert_eq!(prod.insert_iter(&mut iter), 1);
    assert!(cons.pop_iter().eq([1, 2, 4]));
}
