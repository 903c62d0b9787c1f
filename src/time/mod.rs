//! Duration strings: seconds to "h:m:s" fields and "1h30m20s" literals back to seconds.

pub mod format;
pub mod parse;
pub mod precision;

pub use format::{format_range, format_time};
pub use parse::{ParsedDuration, parse_time_str};
pub use precision::{Precision, PrecisionRange, range_span};
