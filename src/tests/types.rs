use super::Rb;
use crate::traits::*;
use core::fmt::Debug;

fn check<T: Copy + Default + PartialEq + Debug>(values: [T; 5]) {
    let mut storage = [T::default(); 4];
    let mut rb = Rb::new(&mut storage);

    assert_eq!(rb.insert_slice(&values), 3);
    assert_eq!(rb.forced_insert(values[3]), Some(values[0]));
    assert_eq!(rb.remove(), Ok(values[1]));
    assert_eq!(rb.try_insert(values[4]), Ok(()));
    assert!(rb.pop_iter().eq([values[2], values[3], values[4]]));
}

#[test]
fn integers() {
    check([1u8, 2, 3, 4, 5]);
    check([1000u16, 2000, 3000, 4000, 5000]);
    check([-1i32, -2, -3, -4, -5]);
    check([u64::MAX, 0, 1, u64::MAX - 1, 2]);
}

#[test]
fn floats() {
    check([69.69f32, -0.5, 1e10, f32::MIN_POSITIVE, 3.25]);
    check([0.1f64, 0.2, 0.3, -1e-300, 42.0]);
}

#[test]
fn chars() {
    check(['a', 'b', 'я', '字', '\0']);
}

#[derive(Clone, Copy, Default, PartialEq, Debug)]
struct Sample {
    timestamp: u32,
    value: f32,
}

#[test]
fn structs() {
    let s = |t, v| Sample { timestamp: t, value: v };
    check([s(1, 0.5), s(2, 1.5), s(3, 2.5), s(4, 3.5), s(5, 4.5)]);
}

#[test]
fn zero_sized() {
    let mut storage = [(); 3];
    let mut rb = Rb::new(&mut storage);

    assert_eq!(rb.insert_iter(core::iter::repeat(())), 2);
    assert!(rb.is_full());
    assert_eq!(rb.remove(), Ok(()));
    assert_eq!(rb.size(), 1);
}
