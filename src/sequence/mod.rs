use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::text::TextRenderable;

pub mod traits;

/// ### -> `Sequence<T>` - An ordered, growable sequence with the method set of a scripting-language array.
///
/// `Sequence<T>` wraps a `Vec<T>` and exposes the familiar array vocabulary
/// (`at`, `filter`, `reduce`, `find`, `group`, `splice`, `join`, ...) through a
/// handful of family traits, all re-exported by the [`prelude`].
///
/// ### -> `Invariants`
///
/// 1. **Insertion Order**: elements stay in insertion order unless a method explicitly
///    reorders them (`reverse`, `sort`, `sort_by`) or removes some of them.
/// 2. **No Uniqueness**: duplicates are allowed.
/// 3. **Index Domain**: stored positions are `0..length`. Negative indices are only an
///    addressing mode accepted by some methods (`-1` is the last element).
///
/// ### -> `Traits Implemented`
///
/// - **`Length`**: `length`, `is_empty`, `length_eq`, `length_cmp`.
/// - **`Conversion<T>`**: `from_raw` / `to_raw` copies from and to plain collections.
/// - **`Access<T>`**: `at`, `at_mut`, `keys`, `entries`, `values`.
/// - **`Query<T>`**: `every`, `some`, `find`, `find_index`, `find_last`, `find_last_index`.
/// - **`Search<T>`**: `includes`, `index_of`, `last_index_of` (`T: PartialEq`).
/// - **`Transform<T>`**: `filter`, `map`, `for_each`, `reduce`, `reduce_right`, `group`, `concat`, `slice`.
/// - **`Stack<T>`**: `push`, `pop`, `peek`.
/// - **`Queue<T>`**: `shift`, `unshift`.
/// - **`Mutation<T>`**: `fill`, `reverse`, `sort`, `sort_by`, `splice`, `copy_within`.
/// - **`Join<T>`**: `join` (`T: TextRenderable`).
/// - **`SnapShot<T>`** and **`Bincode<T>`**: independent copies and serialization.
///
/// ### -> `Error Handling`
///
/// - **Absent values** (out-of-range `at`, `pop`/`shift` on an empty sequence, failed `find*`):
///   `Option::None`. `index_of`/`last_index_of` report a miss as `-1`.
/// - **Malformed ranges** (a start beyond the length): `Result::Err` with a descriptive message.
///   Range ends are clamped instead.
///
/// ### -> `Ownership`
///
/// Every collection handed in is copied or moved in, and every collection handed
/// out (`to_raw`, `filter`, `concat`, `slice`, ...) is an independent copy. Mutating
/// the sequence afterwards never changes previously returned values.
///
/// ### -> `Usage Example`
///
/// ```
/// use chainseq::prelude::*;
///
/// let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
///
/// assert_eq!(sequence.at(-1), Some(&5));
/// assert_eq!(sequence.filter(|v, _| *v > 3), [4, 5]);
/// assert_eq!(sequence.join("-"), "1-2-3-4-5");
///
/// sequence.push([6]);
/// sequence.reverse();
/// assert_eq!(sequence.shift(), Some(6));
/// assert_eq!(sequence.to_raw(), vec![5, 4, 3, 2, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Sequence<T> {
    elements: Vec<T>,
}

/// Wire configuration used by [`Bincode`](traits::Bincode).
#[cfg(feature = "serialization")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BincodeConfiguration {
    /// `bincode::config::standard()`: variable-length integers, little endian.
    #[default]
    Standard,
    /// `bincode::config::legacy()`: fixed-length integers, compatible with bincode 1.x.
    Legacy,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Creates an empty sequence with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { elements: Vec::with_capacity(capacity) }
    }

    /// Borrows the elements as a slice, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterates the elements by reference, front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Maps every element to a sequence and concatenates the results.
    ///
    /// ```
    /// use chainseq::prelude::*;
    ///
    /// let words = Sequence::from(vec!["ab", "c"]);
    /// let letters = words.flat_map(|word, _| word.chars().collect());
    /// assert_eq!(letters, ['a', 'b', 'c']);
    /// ```
    pub fn flat_map<U>(&self, mut mapper: impl FnMut(&T, usize) -> Sequence<U>) -> Sequence<U> {
        let mut flattened = Sequence::new();
        for (index, value) in self.elements.iter().enumerate() {
            flattened.elements.append(&mut mapper(value, index).elements);
        }
        flattened
    }

    /// Resolves a possibly negative index into a stored position.
    fn resolve(&self, index: isize) -> Option<usize> {
        let length = self.elements.len();
        if length == 0 {
            return None;
        }

        if index >= 0 {
            let index = index as usize;
            return (index < length).then_some(index);
        }

        // adding the length until non-negative is a euclidean remainder
        Some(index.rem_euclid(length as isize) as usize)
    }

    fn check_start(&self, start: usize, operation: &'static str) -> anyhow::Result<()> {
        let length = self.elements.len();
        if start > length {
            tracing::debug!(operation, start, length, "range start rejected");
            anyhow::bail!(
                "Index {} out of bounds for sequence of length {}. '{}' requires a start position within 0..={}.",
                start,
                length,
                operation,
                length
            );
        }
        Ok(())
    }

    /// Clamps a half-open range end to `start..=length`.
    fn clamp_end(&self, start: usize, end: Option<usize>, operation: &'static str) -> usize {
        let length = self.elements.len();
        match end {
            None => length,
            Some(end) if end > length => {
                tracing::trace!(operation, end, length, "range end clamped");
                length
            }
            Some(end) => end.max(start),
        }
    }
}

impl<T> Sequence<Sequence<T>> {
    /// Concatenates the nested sequences, one level deep.
    ///
    /// ```
    /// use chainseq::prelude::*;
    ///
    /// let nested = Sequence::from(vec![Sequence::from(vec![1, 2]), Sequence::new(), Sequence::from(vec![3])]);
    /// assert_eq!(nested.flat(), [1, 2, 3]);
    /// ```
    #[must_use = "Flattened sequences must have a purpose!"]
    pub fn flat(&self) -> Sequence<T>
    where
        T: Clone,
    {
        self.elements
            .iter()
            .flat_map(|inner| inner.elements.iter().cloned())
            .collect()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self { elements: Vec::from(elements) }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { elements: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.elements == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.elements == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.elements == other
    }
}

impl<T: TextRenderable> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&traits::Join::join(self, ","))
    }
}

impl<T: TextRenderable> TextRenderable for Sequence<T> {
    fn render(&self) -> String {
        traits::Join::join(self, ",")
    }
}

impl<T> traits::Length for Sequence<T> {
    fn length(&self) -> usize {
        self.elements.len()
    }
}

impl<T> traits::Conversion<T> for Sequence<T>
where
    T: Clone,
{
    fn from_raw(items: &[T]) -> Self {
        Self { elements: items.to_vec() }
    }

    fn to_raw(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T> traits::Access<T> for Sequence<T> {
    fn at(&self, index: isize) -> Option<&T> {
        let position = self.resolve(index)?;
        self.elements.get(position)
    }

    fn at_mut(&mut self, index: isize) -> Option<&mut T> {
        let position = self.resolve(index)?;
        self.elements.get_mut(position)
    }

    fn keys(&self) -> Vec<usize> {
        (0..self.elements.len()).collect()
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (usize, &'a T)>
    where
        T: 'a,
    {
        self.elements.iter().enumerate()
    }

    fn values<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.elements.iter()
    }
}

impl<T> traits::Query<T> for Sequence<T> {
    fn every(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> bool {
        self.elements
            .iter()
            .enumerate()
            .all(|(index, value)| predicate(value, index))
    }

    fn some(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> bool {
        self.elements
            .iter()
            .enumerate()
            .any(|(index, value)| predicate(value, index))
    }

    fn find(&self, predicate: impl FnMut(&T, usize) -> bool) -> Option<&T> {
        let index = self.find_index(predicate)?;
        self.elements.get(index)
    }

    fn find_index(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .find(|(index, value)| predicate(value, *index))
            .map(|(index, _)| index)
    }

    fn find_last(&self, predicate: impl FnMut(&T, usize) -> bool) -> Option<&T> {
        let index = self.find_last_index(predicate)?;
        self.elements.get(index)
    }

    fn find_last_index(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .rev()
            .find(|(index, value)| predicate(value, *index))
            .map(|(index, _)| index)
    }
}

impl<T> traits::Search<T> for Sequence<T>
where
    T: PartialEq,
{
    fn includes(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    fn index_of(&self, value: &T) -> isize {
        traits::Query::find_index(self, |element, _| element == value)
            .map_or(-1, |index| index as isize)
    }

    fn last_index_of(&self, value: &T) -> isize {
        traits::Query::find_last_index(self, |element, _| element == value)
            .map_or(-1, |index| index as isize)
    }
}

impl<T> traits::Transform<T> for Sequence<T> {
    fn filter(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> Self
    where
        T: Clone,
    {
        self.elements
            .iter()
            .enumerate()
            .filter(|(index, value)| predicate(value, *index))
            .map(|(_, value)| value.clone())
            .collect()
    }

    fn map(&mut self, mut mutator: impl FnMut(&mut T, usize)) -> &mut Self {
        for (index, value) in self.elements.iter_mut().enumerate() {
            mutator(value, index);
        }
        self
    }

    fn for_each(&mut self, mut visitor: impl FnMut(&T, usize, &mut Vec<T>))
    where
        T: Clone,
    {
        let mut staging = self.elements.clone();
        for (index, value) in self.elements.iter().enumerate() {
            visitor(value, index, &mut staging);
        }
        self.elements = staging;
    }

    fn reduce<A>(&self, mut accumulator: impl FnMut(Option<A>, &T, usize) -> A, initial: Option<A>) -> Option<A> {
        let mut accumulated = initial;
        for (index, value) in self.elements.iter().enumerate() {
            accumulated = Some(accumulator(accumulated, value, index));
        }
        accumulated
    }

    fn reduce_right<A>(&self, mut accumulator: impl FnMut(Option<A>, &T, usize) -> A, initial: Option<A>) -> Option<A> {
        let mut accumulated = initial;
        for (index, value) in self.elements.iter().enumerate().rev() {
            accumulated = Some(accumulator(accumulated, value, index));
        }
        accumulated
    }

    fn group<K>(&self, mut classifier: impl FnMut(&T, usize) -> Option<K>) -> HashMap<K, Self>
    where
        K: Eq + Hash,
        T: Clone,
    {
        let mut groups: HashMap<K, Self> = HashMap::new();
        for (index, value) in self.elements.iter().enumerate() {
            let Some(key) = classifier(value, index) else {
                continue;
            };
            groups.entry(key).or_default().elements.push(value.clone());
        }
        groups
    }

    fn concat<'a>(&self, others: impl IntoIterator<Item = &'a Self>) -> Self
    where
        Self: 'a,
        T: Clone,
    {
        let mut elements = self.elements.clone();
        for other in others {
            elements.extend_from_slice(&other.elements);
        }
        Self { elements }
    }

    fn slice(&self, start: isize, end: Option<isize>) -> anyhow::Result<Self>
    where
        T: Clone,
    {
        let length = self.elements.len() as isize;

        let requested = start;
        let start = if start < 0 { length + start } else { start };
        if start < 0 || start > length {
            tracing::debug!(operation = "slice", start = requested, length, "range start rejected");
            anyhow::bail!(
                "Index {} out of bounds for sequence of length {}. 'slice' requires a start position within -{}..={}.",
                requested,
                length,
                length,
                length
            );
        }

        let end = match end {
            None => length,
            // below the front counts as no end at all
            Some(end) if end < -length => length,
            Some(end) if end < 0 => length + end,
            Some(end) if end > length => {
                tracing::trace!(operation = "slice", end, length, "range end clamped");
                length
            }
            Some(end) => end,
        };
        let end = end.max(start);

        Ok(Self::from(self.elements[start as usize..end as usize].to_vec()))
    }
}

impl<T> traits::Stack<T> for Sequence<T> {
    fn push(&mut self, values: impl IntoIterator<Item = T>) -> usize {
        self.elements.extend(values);
        self.elements.len()
    }

    fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.elements.last()
    }
}

impl<T> traits::Queue<T> for Sequence<T> {
    fn shift(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        Some(self.elements.remove(0))
    }

    fn unshift(&mut self, values: impl IntoIterator<Item = T>) -> usize {
        let mut elements: Vec<T> = values.into_iter().collect();
        elements.append(&mut self.elements);
        self.elements = elements;
        self.elements.len()
    }
}

impl<T> traits::Mutation<T> for Sequence<T> {
    fn fill(&mut self, value: T, start: usize, end: Option<usize>) -> anyhow::Result<&mut Self>
    where
        T: Clone,
    {
        self.check_start(start, "fill")?;

        let length = self.elements.len();
        if start == length {
            return Ok(self);
        }

        // inclusive end, never past the last element
        let last = length - 1;
        let end = match end {
            Some(end) if end > last => {
                tracing::trace!(operation = "fill", end, last, "range end clamped");
                last
            }
            Some(end) => end,
            None => last,
        };

        if end >= start {
            self.elements[start..=end].fill(value);
        }
        Ok(self)
    }

    fn reverse(&mut self) -> &mut Self {
        self.elements.reverse();
        self
    }

    fn sort(&mut self, mut less: impl FnMut(&T, &T) -> bool) -> &mut Self {
        self.elements.sort_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        self
    }

    fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) -> &mut Self {
        self.elements.sort_by(compare);
        self
    }

    fn splice(&mut self, start: usize, delete_count: usize, insert: impl IntoIterator<Item = T>) -> anyhow::Result<Self> {
        self.check_start(start, "splice")?;

        let available = self.elements.len() - start;
        let delete_count = if delete_count > available {
            tracing::trace!(operation = "splice", delete_count, available, "delete count clamped");
            available
        } else {
            delete_count
        };

        let removed: Vec<T> = self
            .elements
            .splice(start..start + delete_count, insert)
            .collect();
        Ok(Self::from(removed))
    }

    fn copy_within(&mut self, target: usize, start: usize, end: Option<usize>) -> anyhow::Result<&mut Self>
    where
        T: Clone,
    {
        self.check_start(target, "copy_within")?;
        self.check_start(start, "copy_within")?;

        let end = self.clamp_end(start, end, "copy_within");
        let count = (end - start).min(self.elements.len() - target);
        if count > 0 {
            let chunk = self.elements[start..start + count].to_vec();
            self.elements[target..target + count].clone_from_slice(&chunk);
        }
        Ok(self)
    }
}

impl<T> traits::Join<T> for Sequence<T>
where
    T: TextRenderable,
{
    fn join(&self, separator: &str) -> String {
        self.elements
            .iter()
            .map(<T as TextRenderable>::render)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl<T> traits::SnapShot<T> for Sequence<T>
where
    T: Clone,
{
    fn snapshot(&self) -> Vec<T> {
        self.elements.clone()
    }
}

#[cfg(feature = "serialization")]
impl<T> traits::Bincode<T> for Sequence<T>
where
    T: Clone,
{
    fn bincode(&self, configuration: &BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: serde::Serialize,
    {
        let snapshot = traits::SnapShot::snapshot(self);
        let encoded = match configuration {
            BincodeConfiguration::Standard => {
                bincode::serde::encode_to_vec(&snapshot, bincode::config::standard())?
            }
            BincodeConfiguration::Legacy => {
                bincode::serde::encode_to_vec(&snapshot, bincode::config::legacy())?
            }
        };
        Ok(encoded)
    }

    fn from_bincode(bytes: &[u8], configuration: &BincodeConfiguration) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned,
    {
        let elements: Vec<T> = match configuration {
            BincodeConfiguration::Standard => {
                bincode::serde::decode_from_slice(bytes, bincode::config::standard())?.0
            }
            BincodeConfiguration::Legacy => {
                bincode::serde::decode_from_slice(bytes, bincode::config::legacy())?.0
            }
        };
        Ok(Self::from(elements))
    }

    fn json(&self) -> anyhow::Result<String>
    where
        T: serde::Serialize,
    {
        Ok(serde_json::to_string(&self.elements)?)
    }

    fn from_json(text: &str) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned,
    {
        let elements: Vec<T> = serde_json::from_str(text)?;
        Ok(Self::from(elements))
    }
}

pub mod prelude;

#[cfg(test)]
mod tests;
