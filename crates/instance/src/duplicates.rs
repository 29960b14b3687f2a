//! Duplicate detection over ordered point sequences.
//!
//! Two orderings live here and they are not interchangeable:
//! [`find_duplicates`] reports repeats in the order they are *recognized*
//! (second occurrence), while [`unique_in_order`] keeps survivors in the
//! order they *first appear*.

use std::collections::HashSet;
use std::hash::Hash;

/// Values occurring more than once, each listed once, ordered by second
/// occurrence.
pub fn find_duplicates<T>(values: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(values.len());
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for value in values {
        if !seen.insert(value) && reported.insert(value) {
            duplicates.push(value.clone());
        }
    }
    duplicates
}

/// Stable deduplication: keeps each value the first time it is seen.
pub fn unique_in_order<T>(values: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

pub fn count_unique<T>(values: &[T]) -> usize
where
    T: Eq + Hash,
{
    values.iter().collect::<HashSet<_>>().len()
}

/// `declared - |unique(values)|`, sign preserved.
pub fn duplicate_count<T>(declared: usize, values: &[T]) -> i64
where
    T: Eq + Hash,
{
    let unique = count_unique(values);
    i64::try_from(declared).unwrap_or(i64::MAX) - i64::try_from(unique).unwrap_or(i64::MAX)
}
