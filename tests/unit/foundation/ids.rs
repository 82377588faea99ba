use std::collections::HashSet;
use std::sync::Arc;

use super::*;

#[test]
fn random_keys_do_not_repeat() {
    let src = RandomKeys;
    let keys: HashSet<Key> = KeyStream::new(&src).take(1000).collect();
    assert_eq!(keys.len(), 1000);
}

#[test]
fn random_keys_are_uuid_shaped() {
    let k = RandomKeys.next_key();
    assert!(uuid::Uuid::parse_str(k.as_str()).is_ok());
}

#[test]
fn sequential_keys_count_from_zero() {
    let src = SequentialKeys::new("k-");
    let keys: Vec<String> = KeyStream::new(&src)
        .take(3)
        .map(|k| k.to_string())
        .collect();
    assert_eq!(keys, vec!["k-0", "k-1", "k-2"]);
    assert_eq!(src.minted(), 3);
}

#[test]
fn sequential_keys_are_unique_across_threads() {
    let src = Arc::new(SequentialKeys::new("t"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let src = Arc::clone(&src);
            std::thread::spawn(move || (0..250).map(|_| src.next_key()).collect::<Vec<_>>())
        })
        .collect();

    let mut all = HashSet::new();
    for h in handles {
        for k in h.join().unwrap() {
            assert!(all.insert(k));
        }
    }
    assert_eq!(all.len(), 1000);
    assert_eq!(src.minted(), 1000);
}

#[test]
fn key_borrows_as_str() {
    let mut set = HashSet::new();
    set.insert(Key::new("abc"));
    assert!(set.contains("abc"));
}
