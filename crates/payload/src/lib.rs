//! Tolerant JSON payload parsing and opaque JSON cursors.
//!
//! Text produced by language models or pasted by users rarely arrives as a
//! bare JSON document. [`parse_json_payload`] accepts a document wrapped in
//! a Markdown code fence or embedded in surrounding prose and reports a
//! single error message when nothing usable is found.
//!
//! ```
//! use plainkit_payload::parse_json_payload;
//! use serde_json::json;
//!
//! let raw = "```json\n{\"a\":1}\n```";
//! assert_eq!(parse_json_payload(raw).parsed, Some(json!({"a": 1})));
//! ```

mod cursor;
mod error;
mod extract;
mod fence;
mod parse;

pub use cursor::{
    decode_json_cursor, decode_uri_component, encode_json_cursor, encode_uri_component,
    try_decode_json_cursor,
};
pub use error::{CursorError, PayloadError};
pub use extract::extract_first_json_object;
pub use fence::strip_code_fence;
pub use parse::{parse_json_payload, parse_json_payload_as, try_parse_json, ParseJsonPayloadResult};
