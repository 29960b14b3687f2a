use serde::{Deserialize, Serialize};
use std::fmt;

use crate::duplicates::{count_unique, find_duplicates, unique_in_order};

/// One knapsack item: `objective_count` values followed by a weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub values: Vec<i64>,
    pub weight: i64,
}

impl Item {
    pub fn new(values: Vec<i64>, weight: i64) -> Self {
        Self { values, weight }
    }

    /// Integers in file order (values, then weight).
    pub fn fields(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied().chain(std::iter::once(self.weight))
    }
}

/// A nondominated point in objective space.
///
/// Displays in tuple notation, with a trailing comma for a single value:
/// `(1, 2)`, `(7,)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(pub Vec<i64>);

impl Point {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        if self.0.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

/// Decoded content of one instance file.
///
/// `points` keeps every line exactly as read, repeats included, so the
/// declared count can be checked against the distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub item_count: usize,
    pub objective_count: usize,
    pub capacity: i64,
    pub items: Vec<Item>,
    pub declared_point_count: usize,
    pub points: Vec<Point>,
}

impl Instance {
    /// Number of distinct points.
    pub fn unique_point_count(&self) -> usize {
        count_unique(&self.points)
    }

    /// `declared_point_count - unique_point_count`. Negative when the file
    /// lists more distinct points than it declares.
    pub fn point_count_delta(&self) -> i64 {
        crate::duplicates::duplicate_count(self.declared_point_count, &self.points)
    }

    pub fn is_consistent(&self) -> bool {
        self.point_count_delta() == 0
    }

    /// Points seen more than once, in order of their second occurrence.
    pub fn duplicate_points(&self) -> Vec<Point> {
        find_duplicates(&self.points)
    }

    /// Canonical copy: points deduplicated by first occurrence and the
    /// declared count set to match.
    pub fn deduplicated(&self) -> Instance {
        let points = unique_in_order(&self.points);
        Instance {
            item_count: self.item_count,
            objective_count: self.objective_count,
            capacity: self.capacity,
            items: self.items.clone(),
            declared_point_count: points.len(),
            points,
        }
    }
}
