use crate::sequence::prelude::*;

#[test]
fn from_raw() {
    let raw = vec![1, 2, 3, 4];
    let sequence = Sequence::from_raw(&raw);

    assert_eq!(sequence.length(), raw.len());
    for (index, value) in raw.iter().enumerate() {
        assert_eq!(sequence.at(index as isize), Some(value));
    }
}

#[test]
fn from_raw_does_not_alias() {
    let mut raw = vec![1, 2, 3];
    let sequence = Sequence::from_raw(&raw);

    raw[0] = 100;
    assert_eq!(sequence, [1, 2, 3]);
}

#[test]
fn to_raw() {
    let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
    let raw = sequence.to_raw();
    assert_eq!(raw, vec![1, 2, 3, 4, 5]);

    // later mutation never reaches the copy
    sequence.map(|v, _| *v = 0);
    assert_eq!(raw, vec![1, 2, 3, 4, 5]);
    assert_eq!(sequence, [0, 0, 0, 0, 0]);
}

#[test]
fn snapshot_matches_to_raw() {
    let sequence = Sequence::from(vec!["a", "b"]);
    assert_eq!(sequence.snapshot(), sequence.to_raw());
}

#[test]
fn std_conversions() {
    let sequence: Sequence<i32> = (1..=3).collect();
    assert_eq!(sequence, vec![1, 2, 3]);

    let from_array = Sequence::from([1, 2, 3]);
    assert_eq!(from_array, sequence);

    let back: Vec<i32> = sequence.clone().into();
    assert_eq!(back, vec![1, 2, 3]);

    let doubled: Vec<i32> = sequence.iter().map(|v| v * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);

    let mut extended = sequence;
    extended.extend([4, 5]);
    assert_eq!(extended.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn seq_macro() {
    let sequence = crate::seq![1, 2, 3];
    assert_eq!(sequence, [1, 2, 3]);

    let empty: Sequence<String> = crate::seq![];
    assert!(empty.is_empty());
}

#[test]
fn length_comparisons() {
    let short = Sequence::from(vec![1, 2]);
    let long = Sequence::from(vec![1, 2, 3]);

    assert!(!short.length_eq(&long));
    assert!(short.length_eq(&Sequence::from(vec![9, 9])));
    assert_eq!(short.length_cmp(&long), std::cmp::Ordering::Less);
    assert_eq!(long.length_cmp(&short), std::cmp::Ordering::Greater);
}
