use super::precision::{Precision, PrecisionRange};
use crate::error::{LiteralFault, TimeError};
use serde::Serialize;

/// Digits allowed per field.
const MAX_FIELD_DIGITS: u8 = 2;
/// Largest digit allowed in the leading position of a field.
const MAX_LEADING_DIGIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedDuration {
    pub seconds: u32,
    pub range: PrecisionRange,
}

/// Digits of the field currently being scanned.
#[derive(Default)]
struct Field {
    value: u32,
    digits: u8,
}

impl Field {
    fn push(&mut self, digit: u32, c: char) -> Result<(), LiteralFault> {
        if self.digits >= MAX_FIELD_DIGITS {
            return Err(LiteralFault::FieldTooLong);
        }
        if self.digits == 0 && digit > MAX_LEADING_DIGIT {
            return Err(LiteralFault::LeadingDigit(c));
        }
        self.value = self.value * 10 + digit;
        self.digits += 1;
        Ok(())
    }

    fn take(&mut self) -> u32 {
        std::mem::take(self).value
    }
}

/// Parse a literal such as "1h30m20s" into seconds and the unit range it used.
///
/// Each field holds at most two digits and its leading digit may not exceed 5,
/// so "99h" or "7m" are rejected. A field with no digits counts as zero.
/// Units may repeat or appear in any order; the inferred range runs from the
/// most to the least significant unit seen, so a single field yields a range
/// of one unit.
pub fn parse_time_str(text: &str) -> Result<ParsedDuration, TimeError> {
    scan(text).map_err(|reason| {
        tracing::debug!(literal = text, %reason, "Rejected duration literal");
        TimeError::malformed(text, reason)
    })
}

fn scan(text: &str) -> Result<ParsedDuration, LiteralFault> {
    let mut field = Field::default();
    let mut seconds: u32 = 0;
    let mut range: Option<PrecisionRange> = None;

    for c in text.chars() {
        if let Some(digit) = c.to_digit(10) {
            field.push(digit, c)?;
            continue;
        }

        let precision = Precision::from_unit(c).ok_or(LiteralFault::UnknownUnit(c))?;
        seconds = seconds
            .checked_add(field.take() * precision.multiplier())
            .ok_or(LiteralFault::Overflow)?;

        range = Some(match range {
            None => PrecisionRange::single(precision),
            Some(range) => range.including(precision),
        });
    }

    if field.digits > 0 {
        return Err(LiteralFault::DanglingDigits);
    }

    let range = range.ok_or(LiteralFault::Empty)?;
    Ok(ParsedDuration { seconds, range })
}
