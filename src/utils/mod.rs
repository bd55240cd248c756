mod string;

pub use string::{extract_last_segment, normalize_name, split_trailing_digits, unquote_string};
