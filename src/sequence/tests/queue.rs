use crate::sequence::prelude::*;

#[test]
fn shift() {
    let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);

    let removed = sequence.shift();

    assert_eq!(sequence.length(), 4);
    assert_eq!(removed, Some(1));
    assert_eq!(sequence, [2, 3, 4, 5]);
}

#[test]
fn shift_empty() {
    let mut sequence = Sequence::<i32>::new();

    assert!(sequence.shift().is_none());
    assert_eq!(sequence.length(), 0);
}

#[test]
fn unshift() {
    let mut sequence = Sequence::from(vec![3, 4]);

    assert_eq!(sequence.unshift([1, 2]), 4);
    assert_eq!(sequence, [1, 2, 3, 4]);

    assert_eq!(sequence.unshift([0]), 5);
    assert_eq!(sequence.at(0), Some(&0));
}

#[test]
fn unshift_into_empty() {
    let mut sequence = Sequence::new();
    sequence.unshift(vec!["x".to_string(), "y".to_string()]);
    assert_eq!(sequence, ["x".to_string(), "y".to_string()]);
}

#[test]
fn queue_order() {
    let mut sequence = Sequence::new();
    for i in 0..10 {
        sequence.push([i]);
    }

    // dequeues in insertion order
    for i in 0..10 {
        assert_eq!(sequence.shift(), Some(i));
    }
    assert!(sequence.is_empty());
}
