//! plainkit-value - deep copy and deep freeze for dynamic value graphs
//!
//! A [`Value`] is a tagged union of scalars, sequences, keyed mappings,
//! timestamps, unique-sets, key-to-value maps, patterns and opaque host
//! values. Composite values live in shared [`Node`]s that carry their own
//! frozen flag, so freezing is an in-place operation visible through every
//! handle to the node.
//!
//! # Example
//!
//! ```
//! use plainkit_value::{deep_copy, deep_freeze, Value};
//!
//! let config = Value::object([
//!     ("name", Value::from("demo")),
//!     ("tags", Value::set([Value::from("a"), Value::from("b")])),
//! ]);
//!
//! let frozen = deep_freeze(config.clone());
//! assert!(frozen.same_identity(&config));
//! assert!(config.get("tags").unwrap().is_frozen());
//!
//! let editable = deep_copy(&config);
//! assert_eq!(editable, config);
//! assert!(!editable.is_frozen());
//! ```

mod collections;
mod copy;
mod error;
mod freeze;
mod json;
mod node;
mod pattern;
mod value;

pub use collections::{ValueMap, ValueSet};
pub use copy::{deep_copy, deep_copy_with, CopyMode};
pub use error::ValueError;
pub use freeze::{deep_freeze, deep_freeze_with_stats, FreezeStats};
pub use node::Node;
pub use pattern::Pattern;
pub use value::{Array, Kind, Object, Value};
