//! plainkit-util - small stateless helpers
//!
//! Each module is independent: composite key comparison, string formatting,
//! number normalization, array reordering, JSON object lookup and prefix
//! search tokens.

pub mod array;
pub mod assert;
pub mod key_cmp;
pub mod number;
pub mod object;
pub mod search;
pub mod strings;

pub use array::move_array_entry_index;
pub use key_cmp::{compare_keys, compare_keys_with_direction, KeyPart, SortDirection};
pub use number::{normalize_positive_number, normalize_positive_number_or_zero};
pub use object::{
    deep_object_scan, deep_object_scan_with, has_own_property, read_object_property,
    read_object_property_with,
};
pub use search::{build_search_tokens, matches_search_tokens, tokenize_search_text};
pub use strings::{
    build_api_url, count_words, escape_html, format_bullet_text, normalize_base_url,
    normalize_bullet_text,
};
