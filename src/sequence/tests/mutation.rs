use std::cmp::Ordering;

use crate::sequence::prelude::*;

#[test]
fn fill() -> anyhow::Result<()> {
    let mut a = Sequence::from(vec![1, 2, 3, 4, 5]);
    let mut b = Sequence::from(vec![1, 2, 3, 4, 5]);

    // without end
    a.fill(10, 2, None)?;
    assert_eq!(a, [1, 2, 10, 10, 10]);

    // with end (inclusive)
    b.fill(10, 2, Some(3))?;
    assert_eq!(b, [1, 2, 10, 10, 5]);

    Ok(())
}

#[test]
fn fill_never_extends() -> anyhow::Result<()> {
    let mut sequence = Sequence::from(vec![1, 2, 3]);

    sequence.fill(0, 1, Some(100))?;

    assert_eq!(sequence, [1, 0, 0]);
    assert_eq!(sequence.length(), 3);
    Ok(())
}

#[test]
fn fill_empty_ranges() -> anyhow::Result<()> {
    let mut sequence = Sequence::from(vec![1, 2, 3]);

    // start at the length addresses nothing
    sequence.fill(9, 3, None)?;
    // end before start
    sequence.fill(9, 2, Some(1))?;
    assert_eq!(sequence, [1, 2, 3]);

    let mut empty = Sequence::<i32>::new();
    empty.fill(9, 0, None)?;
    assert!(empty.is_empty());
    Ok(())
}

#[test]
fn fill_out_of_bounds() {
    let mut sequence = Sequence::from(vec![1, 2, 3]);

    let result = sequence.fill(9, 4, None);
    assert!(result.is_err(), "Filling past the end should error!");
    assert_eq!(sequence, [1, 2, 3]);
}

#[test]
fn fill_chains() -> anyhow::Result<()> {
    let mut sequence = Sequence::from(vec![0; 4]);
    sequence.fill(1, 0, None)?.fill(2, 2, None)?;
    assert_eq!(sequence, [1, 1, 2, 2]);
    Ok(())
}

#[test]
fn reverse() {
    let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);

    sequence.reverse();
    assert_eq!(sequence, [5, 4, 3, 2, 1]);

    sequence.reverse();
    assert_eq!(sequence, [1, 2, 3, 4, 5]);

    let mut empty = Sequence::<u8>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn sort_descending() {
    let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);

    sequence.sort(|a, b| a > b);

    assert_eq!(sequence, [5, 4, 3, 2, 1]);
}

#[test]
fn sort_is_stable() {
    let mut sequence = Sequence::from(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]);

    sequence.sort(|a, b| a.0 < b.0);

    assert_eq!(sequence, [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
}

#[test]
fn sort_by() {
    let mut sequence = Sequence::from(vec!["pear", "fig", "banana", "kiwi"]);

    sequence.sort_by(|a, b| a.len().cmp(&b.len()));
    assert_eq!(sequence, ["fig", "pear", "kiwi", "banana"]);

    sequence.sort_by(|a, b| b.cmp(a));
    assert_eq!(sequence, ["pear", "kiwi", "fig", "banana"]);

    sequence.sort_by(|_, _| Ordering::Equal);
    assert_eq!(sequence, ["pear", "kiwi", "fig", "banana"]);
}

#[test]
fn splice() -> anyhow::Result<()> {
    let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);

    let removed = sequence.splice(1, 2, [20, 30, 40])?;

    assert_eq!(removed, [2, 3]);
    assert_eq!(sequence, [1, 20, 30, 40, 4, 5]);
    Ok(())
}

#[test]
fn splice_insert_only() -> anyhow::Result<()> {
    let mut sequence = Sequence::from(vec![1, 4]);

    let removed = sequence.splice(1, 0, [2, 3])?;
    assert!(removed.is_empty());
    assert_eq!(sequence, [1, 2, 3, 4]);

    // at the length appends
    sequence.splice(4, 0, [5])?;
    assert_eq!(sequence, [1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn splice_clamps_delete_count() -> anyhow::Result<()> {
    let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);

    let removed = sequence.splice(3, 100, std::iter::empty())?;

    assert_eq!(removed, [4, 5]);
    assert_eq!(sequence, [1, 2, 3]);
    Ok(())
}

#[test]
fn splice_out_of_bounds() {
    let mut sequence = Sequence::from(vec![1, 2, 3]);

    let result = sequence.splice(4, 1, [9]);
    assert!(result.is_err(), "Expected error when splicing past the end");
    assert_eq!(sequence, [1, 2, 3]);
}

#[test]
fn copy_within() -> anyhow::Result<()> {
    let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
    sequence.copy_within(0, 3, Some(4))?;
    assert_eq!(sequence, [4, 2, 3, 4, 5]);

    let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
    sequence.copy_within(1, 3, None)?;
    assert_eq!(sequence, [1, 4, 5, 4, 5]);
    Ok(())
}

#[test]
fn copy_within_stops_at_end() -> anyhow::Result<()> {
    let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);

    // overlapping source and target
    sequence.copy_within(3, 0, None)?;

    assert_eq!(sequence, [1, 2, 3, 1, 2]);
    assert_eq!(sequence.length(), 5);
    Ok(())
}

#[test]
fn copy_within_out_of_bounds() {
    let mut sequence = Sequence::from(vec![1, 2, 3]);

    assert!(sequence.copy_within(4, 0, None).is_err());
    assert!(sequence.copy_within(0, 4, None).is_err());
    assert_eq!(sequence, [1, 2, 3]);
}
