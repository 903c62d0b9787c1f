use crate::time::Precision;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("unsupported time format {upper}, {lower}")]
    InvalidPrecisionRange { upper: Precision, lower: Precision },

    #[error("malformed duration literal '{literal}': {reason}")]
    MalformedDurationLiteral {
        literal: String,
        reason: LiteralFault,
    },
}

/// What made a duration literal unparseable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralFault {
    #[error("no fields")]
    Empty,
    #[error("fields hold at most two digits")]
    FieldTooLong,
    #[error("leading digit '{0}' exceeds '5'")]
    LeadingDigit(char),
    #[error("unknown unit '{0}', expected one of s, m, h")]
    UnknownUnit(char),
    #[error("trailing digits without a unit")]
    DanglingDigits,
    #[error("total exceeds the supported number of seconds")]
    Overflow,
}

impl TimeError {
    pub(crate) fn malformed(literal: &str, reason: LiteralFault) -> Self {
        Self::MalformedDurationLiteral {
            literal: literal.to_string(),
            reason,
        }
    }
}
