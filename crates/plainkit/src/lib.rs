//! plainkit - independent, stateless helpers.
//!
//! Re-exports the workspace crates:
//!
//! - [`value`]: a heterogeneous value graph with [`deep_copy`] and
//!   [`deep_freeze`].
//! - [`payload`]: [`parse_json_payload`] for JSON wrapped in fences or prose,
//!   and opaque JSON cursors.
//! - [`util`]: key comparison, string, number, array, lookup and search
//!   helpers.
//!
//! ```
//! use plainkit::{deep_copy, deep_freeze, parse_json_payload, Value};
//!
//! let parsed = parse_json_payload("```json\n{\"tags\":[\"a\"]}\n```").parsed.unwrap();
//! let original = deep_freeze(Value::from(parsed));
//! let copy = deep_copy(&original);
//!
//! assert_eq!(copy, original);
//! assert!(original.is_frozen());
//! assert!(!copy.is_frozen());
//! ```

pub use plainkit_payload as payload;
pub use plainkit_util as util;
pub use plainkit_value as value;

pub use plainkit_payload::{
    decode_json_cursor, encode_json_cursor, extract_first_json_object, parse_json_payload,
    parse_json_payload_as, strip_code_fence, try_decode_json_cursor, CursorError, ParseJsonPayloadResult,
    PayloadError,
};
pub use plainkit_util::{
    build_api_url, build_search_tokens, compare_keys, compare_keys_with_direction, count_words,
    deep_object_scan, deep_object_scan_with, escape_html, format_bullet_text, matches_search_tokens,
    move_array_entry_index, normalize_base_url, normalize_bullet_text, normalize_positive_number,
    normalize_positive_number_or_zero, read_object_property, read_object_property_with,
    tokenize_search_text, KeyPart, SortDirection,
};
pub use plainkit_value::{
    deep_copy, deep_copy_with, deep_freeze, deep_freeze_with_stats, CopyMode, FreezeStats, Kind,
    Pattern, Value, ValueError, ValueMap, ValueSet,
};
