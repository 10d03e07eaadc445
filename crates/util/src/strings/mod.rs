//! String utilities.
//!
//! HTML escaping, word counting, bullet list formatting and API URL joining.

mod bullet;
mod escape;
mod url;
mod words;

pub use bullet::{format_bullet_text, normalize_bullet_text};
pub use escape::escape_html;
pub use url::{build_api_url, normalize_base_url};
pub use words::count_words;
