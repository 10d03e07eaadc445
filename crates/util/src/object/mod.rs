//! Property lookup on `serde_json` values, with optional type assertions
//! from [`crate::assert`].
//!
//! Failed lookups are reported as `tracing` warnings and return `None`.

mod property;
mod scan;

pub use property::{has_own_property, read_object_property, read_object_property_with};
pub use scan::{deep_object_scan, deep_object_scan_with};
