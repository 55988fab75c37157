use circbuf::{traits::*, LocalRb};

const SLOTS: usize = 8;

fn main() {
    let mut float_storage = [0.0f32; SLOTS];
    let mut byte_storage = [0u8; SLOTS];

    let mut float_rb = LocalRb::new(&mut float_storage);
    let mut byte_rb = LocalRb::new(&mut byte_storage);

    float_rb.forced_insert(69.69);
    byte_rb.forced_insert(16);

    let value = float_rb.remove().unwrap();
    let byte = byte_rb.remove().unwrap();

    println!("byte buffer value: {}", byte);
    println!("float buffer value: {}", value);

    if float_rb.is_empty() {
        println!("float buffer empty");
    }
    if byte_rb.is_empty() {
        println!("byte buffer empty");
    }
}
