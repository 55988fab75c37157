use circbuf::{traits::*, LocalRb};

fn main() {
    let mut storage = ['\0'; 4];
    let mut rb = LocalRb::new(&mut storage);

    assert_eq!(rb.forced_insert('A'), None);
    assert_eq!(rb.forced_insert('B'), None);
    assert_eq!(rb.forced_insert('C'), None);
    assert!(rb.is_full());

    assert_eq!(rb.try_insert('D').unwrap_err().into_inner(), 'D');
    assert_eq!(rb.forced_insert('D'), Some('A'));

    assert_eq!(rb.remove(), Ok('B'));
    assert_eq!(rb.remove(), Ok('C'));
    assert_eq!(rb.remove(), Ok('D'));
    assert!(rb.remove().is_err());
}
