use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::text::TextRenderable;

#[cfg(feature = "serialization")]
use crate::sequence::BincodeConfiguration;

/// ### -> `Length Trait`.
///
/// Length inspection shared by every sequence family trait.
///
/// ### -> `Methods`
/// - `length() -> usize`: number of elements currently stored.
/// - `is_empty() -> bool`: true when `length() == 0`.
/// - `length_eq(other) -> bool`: true when both sequences hold the same number of elements.
/// - `length_cmp(other) -> Ordering`: compares the lengths of two sequences.
pub trait Length {
    fn length(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    fn length_eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }

    fn length_cmp(&self, other: &Self) -> Ordering {
        self.length().cmp(&other.length())
    }
}

/// ### -> `Conversion<T> Trait`.
///
/// Moves data between a sequence and a plain slice/`Vec`.
///
/// Conversions always copy: the sequence never aliases the caller's
/// collection, and collections handed out never alias the sequence.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// let raw = vec![1, 2, 3, 4];
/// let sequence = Sequence::from_raw(&raw);
/// assert_eq!(sequence.to_raw(), raw);
/// ```
pub trait Conversion<T>: Length
where
    T: Clone,
    Self: Sized,
{
    /// Wraps a copy of `items`, preserving order and cardinality.
    #[must_use = "Converted sequences must have a purpose!"]
    fn from_raw(items: &[T]) -> Self;

    /// Returns an independent copy of the current contents.
    #[must_use = "Converted collections must have a purpose!"]
    fn to_raw(&self) -> Vec<T>;
}

/// ### -> `Access<T> Trait`.
///
/// Positional access to elements.
///
/// ### -> `Methods`
/// - `at(index: isize) -> Option<&T>`:
///     - Non-negative indices address elements from the front; `None` when `index >= length`.
///     - Negative indices count from the back (`-1` is the last element). The length is added
///       until the index becomes non-negative, so `-length - 1` wraps around to the last element again.
///     - Never panics: every index on an empty sequence is `None`.
/// - `at_mut(index: isize) -> Option<&mut T>`: mutable form of `at`, same index rules.
/// - `keys() -> Vec<usize>`: the valid indices `0..length`.
/// - `entries()`: iterator over `(index, &element)` pairs in order.
/// - `values()`: iterator over `&element` in order.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// let sequence = Sequence::from(vec![10, 20, 30]);
/// assert_eq!(sequence.at(0), Some(&10));
/// assert_eq!(sequence.at(-1), Some(&30));
/// assert_eq!(sequence.at(3), None);
/// assert_eq!(sequence.keys(), vec![0, 1, 2]);
///
/// let pairs: Vec<_> = sequence.entries().collect();
/// assert_eq!(pairs, vec![(0, &10), (1, &20), (2, &30)]);
/// ```
pub trait Access<T>: Length {
    fn at(&self, index: isize) -> Option<&T>;

    fn at_mut(&mut self, index: isize) -> Option<&mut T>;

    fn keys(&self) -> Vec<usize>;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (usize, &'a T)>
    where
        T: 'a;

    fn values<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

/// ### -> `Query<T> Trait`.
///
/// Predicate-driven inspection. Every predicate receives the element and its index.
///
/// ### -> `Methods`
/// - `every(predicate) -> bool`: true when the predicate holds for all elements.
///   Stops at the first failure. Always true for an empty sequence.
/// - `some(predicate) -> bool`: true when the predicate holds for at least one element.
///   Stops at the first success. Always false for an empty sequence.
/// - `find(predicate) -> Option<&T>`: first matching element scanning front to back.
/// - `find_index(predicate) -> Option<usize>`: index of the first match.
/// - `find_last(predicate) -> Option<&T>`: first match scanning back to front,
///   i.e. the last matching element in original order.
/// - `find_last_index(predicate) -> Option<usize>`: index of the last match.
///
/// Failed searches are absent (`None`). Compare with [`Search`], whose index
/// searches use the `-1` sentinel.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// let sequence = Sequence::from(vec![1, 2, 3, 3, 5]);
/// assert!(sequence.every(|v, _| *v < 6));
/// assert!(sequence.some(|v, _| *v == 5));
/// assert_eq!(sequence.find_index(|v, _| *v == 3), Some(2));
/// assert_eq!(sequence.find_last_index(|v, _| *v == 3), Some(3));
/// assert_eq!(sequence.find(|v, _| *v == 10), None);
/// ```
pub trait Query<T>: Length {
    fn every(&self, predicate: impl FnMut(&T, usize) -> bool) -> bool;

    fn some(&self, predicate: impl FnMut(&T, usize) -> bool) -> bool;

    fn find(&self, predicate: impl FnMut(&T, usize) -> bool) -> Option<&T>;

    fn find_index(&self, predicate: impl FnMut(&T, usize) -> bool) -> Option<usize>;

    fn find_last(&self, predicate: impl FnMut(&T, usize) -> bool) -> Option<&T>;

    fn find_last_index(&self, predicate: impl FnMut(&T, usize) -> bool) -> Option<usize>;
}

/// ### -> `Search<T> Trait`.
///
/// Value-equality searches.
///
/// `index_of` and `last_index_of` report a missing value with the numeric
/// sentinel `-1`, unlike [`Query::find_index`] which reports `None`. Both
/// conventions are part of the public contract.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// let sequence = Sequence::from(vec![1, 2, 3, 2, 5]);
/// assert!(sequence.includes(&5));
/// assert_eq!(sequence.index_of(&2), 1);
/// assert_eq!(sequence.last_index_of(&2), 3);
/// assert_eq!(sequence.index_of(&6), -1);
/// ```
pub trait Search<T>: Query<T>
where
    T: PartialEq,
{
    fn includes(&self, value: &T) -> bool;

    fn index_of(&self, value: &T) -> isize;

    fn last_index_of(&self, value: &T) -> isize;
}

/// ### -> `Transform<T> Trait`.
///
/// Derives new values from a sequence, or rewrites its elements in place.
///
/// ### -> `Methods`
/// - `filter(predicate) -> Self`: new sequence holding, in order, the elements the predicate accepts.
/// - `map(mutator) -> &mut Self`: **in place**. The mutator receives a mutable reference to each
///   element and its index and may overwrite the element. The length never changes.
/// - `for_each(visitor)`: the visitor receives each element, its index and a mutable staging
///   buffer initialized as a copy of the contents. Elements handed to the visitor always reflect
///   the state before the pass. Once every original element has been visited the contents are
///   replaced by the staging buffer, so pushes and removals made through it take effect together.
/// - `reduce(accumulator, initial) -> Option<A>`: left-to-right fold. The first call receives
///   `initial` as its accumulator, which is `None` when no seed is supplied (the first element is
///   **not** used as the seed). Returns `None` only for an empty sequence without a seed.
/// - `reduce_right(accumulator, initial) -> Option<A>`: the same fold, right to left.
/// - `group(classifier) -> HashMap<K, Self>`: buckets elements by the key the classifier computes.
///   Elements classified as `None` are left out. Order inside each bucket follows the source.
/// - `concat(others) -> Self`: new sequence with these elements followed by each of `others`.
/// - `slice(start, end) -> Result<Self>`: copy of the half-open range `[start, end)`.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
///
/// let large = sequence.filter(|v, _| *v > 3);
/// assert_eq!(large, [4, 5]);
///
/// let total = sequence.reduce(|acc, v, _| acc.unwrap_or(0) + v, Some(0));
/// assert_eq!(total, Some(15));
///
/// sequence.map(|v, _| *v *= 2);
/// assert_eq!(sequence, [2, 4, 6, 8, 10]);
/// ```
pub trait Transform<T>: Length
where
    Self: Sized,
{
    #[must_use = "Filtered sequences must have a purpose!"]
    fn filter(&self, predicate: impl FnMut(&T, usize) -> bool) -> Self
    where
        T: Clone;

    fn map(&mut self, mutator: impl FnMut(&mut T, usize)) -> &mut Self;

    /// ### -> `Usage`
    ///
    /// ```
    /// use chainseq::prelude::*;
    ///
    /// let mut sequence = Sequence::from(vec![1, 2, 3]);
    /// sequence.for_each(|value, _, staging| staging.push(value + 10));
    ///
    /// // appended elements become visible once the pass is over
    /// assert_eq!(sequence, [1, 2, 3, 11, 12, 13]);
    /// ```
    fn for_each(&mut self, visitor: impl FnMut(&T, usize, &mut Vec<T>))
    where
        T: Clone;

    fn reduce<A>(&self, accumulator: impl FnMut(Option<A>, &T, usize) -> A, initial: Option<A>) -> Option<A>;

    fn reduce_right<A>(&self, accumulator: impl FnMut(Option<A>, &T, usize) -> A, initial: Option<A>) -> Option<A>;

    /// ### -> `Usage`
    ///
    /// ```
    /// use chainseq::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![0, 1, 2, 3, 4, 5]);
    /// let groups = sequence.group(|value, _| match value {
    ///     0 => None,
    ///     v if v % 2 == 0 => Some("even"),
    ///     _ => Some("odd"),
    /// });
    ///
    /// assert_eq!(groups["odd"], [1, 3, 5]);
    /// assert_eq!(groups["even"], [2, 4]);
    /// ```
    #[must_use = "Grouped sequences must have a purpose!"]
    fn group<K>(&self, classifier: impl FnMut(&T, usize) -> Option<K>) -> HashMap<K, Self>
    where
        K: Eq + Hash,
        T: Clone;

    #[must_use = "Concatenated sequences must have a purpose!"]
    fn concat<'a>(&self, others: impl IntoIterator<Item = &'a Self>) -> Self
    where
        Self: 'a,
        T: Clone;

    /// Copies the half-open range `[start, end)` into a new sequence.
    ///
    /// - A negative `start` counts from the back; it must resolve to `0..=length`,
    ///   otherwise an error is returned.
    /// - A negative `end` counts from the back. An `end` below `-length` is treated as absent.
    /// - `None` or an `end` past the last element slices to the end of the sequence.
    /// - An `end` before `start` yields an empty sequence.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use chainseq::prelude::*;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(sequence.slice(1, Some(3))?, [2, 3]);
    /// assert_eq!(sequence.slice(2, None)?, [3, 4, 5]);
    /// assert_eq!(sequence.slice(0, Some(-1))?, [1, 2, 3, 4]);
    /// assert!(sequence.slice(6, None).is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    fn slice(&self, start: isize, end: Option<isize>) -> anyhow::Result<Self>
    where
        T: Clone;
}

/// ### -> `Stack<T> Trait`.
///
/// LIFO operations at the back of the sequence.
///
/// ### -> `Methods`
/// - `push(values) -> usize`: appends zero or more values in argument order, returns the new length.
/// - `pop() -> Option<T>`: removes and returns the last element, `None` when empty.
/// - `peek() -> Option<&T>`: the last element without removing it.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
/// assert_eq!(sequence.push([6, 7]), 7);
/// assert_eq!(sequence.pop(), Some(7));
/// assert_eq!(sequence.peek(), Some(&6));
/// ```
pub trait Stack<T>: Length {
    fn push(&mut self, values: impl IntoIterator<Item = T>) -> usize;

    fn pop(&mut self) -> Option<T>;

    #[must_use = "Peeking must serve a purpose!"]
    fn peek(&self) -> Option<&T>;
}

/// ### -> `Queue<T> Trait`.
///
/// Operations at the front of the sequence.
///
/// ### -> `Methods`
/// - `shift() -> Option<T>`: removes and returns the first element, `None` when empty.
///   Remaining elements move down by one position.
/// - `unshift(values) -> usize`: prepends values, keeping their argument order, and returns the new length.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// let mut sequence = Sequence::from(vec![3, 4]);
/// assert_eq!(sequence.unshift([1, 2]), 4);
/// assert_eq!(sequence.shift(), Some(1));
/// assert_eq!(sequence, [2, 3, 4]);
/// ```
pub trait Queue<T>: Length {
    fn shift(&mut self) -> Option<T>;

    fn unshift(&mut self, values: impl IntoIterator<Item = T>) -> usize;
}

/// ### -> `Mutation<T> Trait`.
///
/// In-place rewrites of the sequence.
///
/// ### -> `Range Policy`
///
/// Start positions are strict: a start beyond `length` is an error carrying the
/// index and the length. A start equal to `length` addresses the empty tail.
/// End positions are clamped to the last valid position, and an end before
/// the start is an empty range.
///
/// ### -> `Methods`
/// - `fill(value, start, end) -> Result<&mut Self>`: overwrites the **inclusive** range
///   `[start, end]` with clones of `value`. `end` defaults to the last index and never extends past it.
/// - `reverse() -> &mut Self`: reverses the element order.
/// - `sort(less) -> &mut Self`: stable sort with a boolean comparator over element values
///   (`less(a, b)` is true when `a` belongs before `b`).
/// - `sort_by(compare) -> &mut Self`: stable sort with a three-way comparator.
/// - `splice(start, delete_count, insert) -> Result<Self>`: removes `delete_count` elements
///   (clamped to what is available) from `start`, inserts `insert` in their place and returns
///   the removed elements.
/// - `copy_within(target, start, end) -> Result<&mut Self>`: copies `[start, end)` over the
///   elements starting at `target`, stopping at the end of the sequence.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
/// sequence.fill(10, 2, Some(3))?;
/// assert_eq!(sequence, [1, 2, 10, 10, 5]);
///
/// sequence.sort(|a, b| a > b);
/// assert_eq!(sequence, [10, 10, 5, 2, 1]);
///
/// let removed = sequence.splice(1, 2, [7, 8, 9])?;
/// assert_eq!(removed, [10, 5]);
/// assert_eq!(sequence, [10, 7, 8, 9, 2, 1]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub trait Mutation<T>: Length
where
    Self: Sized,
{
    fn fill(&mut self, value: T, start: usize, end: Option<usize>) -> anyhow::Result<&mut Self>
    where
        T: Clone;

    fn reverse(&mut self) -> &mut Self;

    fn sort(&mut self, less: impl FnMut(&T, &T) -> bool) -> &mut Self;

    fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) -> &mut Self;

    fn splice(&mut self, start: usize, delete_count: usize, insert: impl IntoIterator<Item = T>) -> anyhow::Result<Self>;

    fn copy_within(&mut self, target: usize, start: usize, end: Option<usize>) -> anyhow::Result<&mut Self>
    where
        T: Clone;
}

/// ### -> `Join<T> Trait`.
///
/// Renders every element with [`TextRenderable`] and concatenates the
/// results with a separator between entries. An empty sequence joins to
/// empty text.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// assert_eq!(Sequence::from(vec![1, 2, 3, 4, 5]).join("-"), "1-2-3-4-5");
/// assert_eq!(Sequence::from(vec![true, false]).join(", "), "true, false");
/// assert_eq!(Sequence::<f32>::new().join("-"), "");
/// ```
pub trait Join<T>
where
    T: TextRenderable,
{
    #[must_use = "Joined text must have a purpose!"]
    fn join(&self, separator: &str) -> String;
}

/// ### -> `SnapShot<T> Trait`.
///
/// Produces an independent `Vec<T>` copy of the contents.
pub trait SnapShot<T>
where
    T: Clone,
{
    #[must_use = "Snapshot output must serve a purpose!"]
    fn snapshot(&self) -> Vec<T>;
}

/// ### -> `Bincode<T> Trait`.
///
/// Serializes a snapshot of the sequence, either as bincode bytes (wire
/// configuration picked with [`BincodeConfiguration`]) or as JSON text.
/// A sequence always encodes as a plain list of its elements.
///
/// ### -> `Usage`
///
/// ```
/// use chainseq::prelude::*;
///
/// let sequence = Sequence::from(vec![1_u32, 2, 3]);
///
/// let bytes = sequence.bincode(&BincodeConfiguration::Standard)?;
/// let decoded = Sequence::<u32>::from_bincode(&bytes, &BincodeConfiguration::Standard)?;
/// assert_eq!(decoded, sequence);
///
/// assert_eq!(sequence.json()?, "[1,2,3]");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[cfg(feature = "serialization")]
pub trait Bincode<T>: SnapShot<T>
where
    T: Clone,
    Self: Sized,
{
    #[must_use = "Bincode serialization output must serve a purpose!"]
    fn bincode(&self, configuration: &BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: serde::Serialize;

    fn from_bincode(bytes: &[u8], configuration: &BincodeConfiguration) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned;

    #[must_use = "JSON serialization output must serve a purpose!"]
    fn json(&self) -> anyhow::Result<String>
    where
        T: serde::Serialize;

    fn from_json(text: &str) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned;
}
