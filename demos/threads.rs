use circbuf::{traits::*, SharedRb};
use std::{thread, time::Duration};

fn main() {
    let mut storage = [0u8; 10];
    let mut rb = SharedRb::new(&mut storage);
    let (mut prod, mut cons) = rb.split_ref();

    let smsg = "The quick brown fox jumps over the lazy dog";

    let rmsg = thread::scope(|s| {
        s.spawn(move || {
            println!("-> sending message: '{}'", smsg);

            let mut bytes = smsg.bytes().chain([0]).peekable();
            while bytes.peek().is_some() {
                if prod.is_full() {
                    println!("-> buffer is full, waiting");
                    thread::sleep(Duration::from_millis(1));
                } else {
                    let n = prod.insert_iter(&mut bytes);
                    println!("-> {} bytes sent", n);
                }
            }

            println!("-> message sent");
        });

        let cjh = s.spawn(move || {
            println!("<- receiving message");

            let mut bytes = Vec::<u8>::new();
            loop {
                if cons.is_empty() {
                    if bytes.ends_with(&[0]) {
                        break;
                    }
                    println!("<- buffer is empty, waiting");
                    thread::sleep(Duration::from_millis(1));
                } else {
                    let before = bytes.len();
                    bytes.extend(cons.pop_iter());
                    println!("<- {} bytes received", bytes.len() - before);
                }
            }

            assert_eq!(bytes.pop(), Some(0));
            let msg = String::from_utf8(bytes).unwrap();
            println!("<- message received: '{}'", msg);

            msg
        });

        cjh.join().unwrap()
    });

    assert_eq!(smsg, rmsg);
}
