use super::precision::{Precision, PrecisionRange};
use crate::error::TimeError;

/// Render `seconds` as colon-separated fields from `upper` down to `lower`.
///
/// Fields are not zero-padded. Only the leading field may exceed its unit's
/// natural bound ("90:0" for 5400 seconds at min..sec); seconds below `lower`
/// are dropped.
pub fn format_time(seconds: u32, upper: Precision, lower: Precision) -> Result<String, TimeError> {
    let range = match PrecisionRange::new(upper, lower) {
        Ok(range) => range,
        Err(e) => {
            tracing::error!(upper = upper.label(), lower = lower.label(), "{}", e);
            return Err(e);
        }
    };

    let mut remaining = seconds;
    let fields: Vec<String> = range
        .levels()
        .map(|precision| {
            let d = precision.multiplier();
            let value = remaining / d;
            remaining -= value * d;
            value.to_string()
        })
        .collect();

    Ok(fields.join(":"))
}

pub fn format_range(seconds: u32, range: PrecisionRange) -> Result<String, TimeError> {
    format_time(seconds, range.upper(), range.lower())
}
