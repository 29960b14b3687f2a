//! # MOBKP Instance
//!
//! Reading, checking and rewriting multi-objective binary knapsack instance
//! files.
//!
//! ## Format
//!
//! ```text
//! <item_count> <objective_count>
//! <capacity>
//! <item_1: objective_count values + weight>
//! ...
//! <item_n>
//! <declared_point_count>
//! <point_1>
//! ...
//! ```
//!
//! The nondominated point list must be duplicate-free. Files that repeat
//! points carry a declared count larger than the number of distinct points.
//!
//! ## Example
//!
//! ```rust
//! use mobkp_instance::{parse_instance_str, render_instance};
//!
//! let inst = parse_instance_str("2 1\n10\n3 1\n5 2\n3\n1 2\n3 4\n1 2\n").unwrap();
//! assert_eq!(inst.point_count_delta(), 1);
//! assert_eq!(inst.duplicate_points()[0].to_string(), "(1, 2)");
//!
//! let fixed = render_instance(&inst);
//! assert_eq!(fixed, "2 1\n10\n3 1\n5 2\n2\n1 2\n3 4\n");
//! ```

pub mod duplicates;
mod error;
mod parser;
mod types;
mod writer;

pub use duplicates::{count_unique, duplicate_count, find_duplicates, unique_in_order};
pub use error::{InstanceError, Result, Section};
pub use parser::{parse_instance_file, parse_instance_str};
pub use types::{Instance, Item, Point};
pub use writer::{render_instance, write_instance};
