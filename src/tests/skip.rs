use super::Rb;
use crate::traits::*;

#[test]
fn skip() {
    let mut storage = [0i8; 11];
    let mut rb = Rb::new(&mut storage);
    let (mut prod, mut cons) = rb.split_ref();
    let mut i = 0;

    for _ in 0..10 {
        prod.try_insert(i).unwrap();
        i += 1;
    }

    assert_eq!(cons.skip(5), 5);
    assert_eq!(cons.remove(), Ok(5));

    for _ in 0..5 {
        prod.try_insert(i).unwrap();
        i += 1;
    }

    assert_eq!(cons.skip(6), 6);
    assert_eq!(cons.remove(), Ok(12));

    for _ in 0..7 {
        prod.try_insert(i).unwrap();
        i += 1;
    }

    // asking too much skips everything
    assert_eq!(cons.skip(10), 9);
    assert_eq!(cons.skip(1), 0);

    assert!(cons.remove().is_err());
    assert_eq!(prod.try_insert(0), Ok(()));
    assert_eq!(cons.remove(), Ok(0));
}

#[test]
fn clear() {
    let mut storage = [0u32; 6];
    let mut rb = Rb::new(&mut storage);
    let (mut prod, mut cons) = rb.split_ref();

    assert_eq!(cons.clear(), 0);

    prod.insert_slice(&[1, 2, 3, 4]);
    cons.skip(3);
    prod.insert_slice(&[5, 6, 7]);
    assert_eq!(cons.size(), 4);

    assert_eq!(cons.clear(), 4);
    assert!(cons.is_empty());
    assert_eq!(cons.read_index(), prod.write_index());

    prod.try_insert(8).unwrap();
    assert_eq!(cons.remove(), Ok(8));
}
