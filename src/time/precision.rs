use crate::error::TimeError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit granularity of a formatted or parsed duration, ordered by significance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Sec,
    Min,
    Hour,
}

impl Precision {
    /// All precisions, least significant first.
    pub const ALL: [Precision; 3] = [Precision::Sec, Precision::Min, Precision::Hour];

    pub fn rank(self) -> u8 {
        match self {
            Precision::Sec => 0,
            Precision::Min => 1,
            Precision::Hour => 2,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Precision::Sec),
            1 => Some(Precision::Min),
            2 => Some(Precision::Hour),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Precision::Sec => "sec",
            Precision::Min => "min",
            Precision::Hour => "hour",
        }
    }

    /// Seconds in one unit of this precision.
    pub fn multiplier(self) -> u32 {
        match self {
            Precision::Sec => 1,
            Precision::Min => 60,
            Precision::Hour => 60 * 60,
        }
    }

    /// Unit character used in duration literals ("1h30m20s").
    pub fn unit(self) -> char {
        match self {
            Precision::Sec => 's',
            Precision::Min => 'm',
            Precision::Hour => 'h',
        }
    }

    pub fn from_unit(c: char) -> Option<Self> {
        match c {
            's' => Some(Precision::Sec),
            'm' => Some(Precision::Min),
            'h' => Some(Precision::Hour),
            _ => None,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of contiguous precision levels between `upper` and `lower`, inclusive.
///
/// Fails when `upper` is less significant than `lower`, or when the range would
/// cover more levels than exist.
pub fn range_span(upper: Precision, lower: Precision) -> Result<u32, TimeError> {
    let span = i32::from(upper.rank()) - i32::from(lower.rank()) + 1;
    if !(1..=3).contains(&span) {
        return Err(TimeError::InvalidPrecisionRange { upper, lower });
    }
    Ok(span as u32)
}

/// The units present in a duration string, from most to least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrecisionRange {
    upper: Precision,
    lower: Precision,
}

impl PrecisionRange {
    pub fn new(upper: Precision, lower: Precision) -> Result<Self, TimeError> {
        range_span(upper, lower)?;
        Ok(Self { upper, lower })
    }

    /// A range covering a single unit.
    pub fn single(precision: Precision) -> Self {
        Self {
            upper: precision,
            lower: precision,
        }
    }

    /// Widen the range so it also covers `precision`.
    pub fn including(self, precision: Precision) -> Self {
        Self {
            upper: self.upper.max(precision),
            lower: self.lower.min(precision),
        }
    }

    pub fn upper(&self) -> Precision {
        self.upper
    }

    pub fn lower(&self) -> Precision {
        self.lower
    }

    pub fn span(&self) -> u32 {
        u32::from(self.upper.rank() - self.lower.rank()) + 1
    }

    /// Covered precisions, most significant first.
    pub fn levels(&self) -> impl Iterator<Item = Precision> {
        let (upper, lower) = (self.upper.rank(), self.lower.rank());
        (lower..=upper).rev().filter_map(Precision::from_rank)
    }
}

impl fmt::Display for PrecisionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.upper, self.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_is_strictly_increasing() {
        assert!(Precision::Sec.rank() < Precision::Min.rank());
        assert!(Precision::Min.rank() < Precision::Hour.rank());
        for p in Precision::ALL {
            assert_eq!(Precision::from_rank(p.rank()), Some(p));
        }
        assert_eq!(Precision::from_rank(3), None);
    }

    #[test]
    fn test_labels_and_multipliers() {
        assert_eq!(Precision::Sec.label(), "sec");
        assert_eq!(Precision::Min.label(), "min");
        assert_eq!(Precision::Hour.label(), "hour");
        assert_eq!(Precision::Sec.multiplier(), 1);
        assert_eq!(Precision::Min.multiplier(), 60);
        assert_eq!(Precision::Hour.multiplier(), 3600);
    }

    #[test]
    fn test_unit_mapping() {
        for p in Precision::ALL {
            assert_eq!(Precision::from_unit(p.unit()), Some(p));
        }
        assert_eq!(Precision::from_unit('d'), None);
    }

    #[test]
    fn test_range_span() {
        assert_eq!(range_span(Precision::Sec, Precision::Sec), Ok(1));
        assert_eq!(range_span(Precision::Min, Precision::Sec), Ok(2));
        assert_eq!(range_span(Precision::Hour, Precision::Sec), Ok(3));
        assert_eq!(range_span(Precision::Hour, Precision::Min), Ok(2));
    }

    #[test]
    fn test_range_span_rejects_inverted_range() {
        let err = range_span(Precision::Sec, Precision::Hour).unwrap_err();
        assert_eq!(
            err,
            TimeError::InvalidPrecisionRange {
                upper: Precision::Sec,
                lower: Precision::Hour,
            }
        );
        assert!(PrecisionRange::new(Precision::Min, Precision::Hour).is_err());
    }

    #[test]
    fn test_levels_most_significant_first() {
        let range = PrecisionRange::new(Precision::Hour, Precision::Sec).unwrap();
        let levels: Vec<_> = range.levels().collect();
        assert_eq!(levels, vec![Precision::Hour, Precision::Min, Precision::Sec]);
        assert_eq!(range.span(), 3);
        assert_eq!(PrecisionRange::single(Precision::Min).span(), 1);
    }

    #[test]
    fn test_including_keeps_upper_above_lower() {
        let range = PrecisionRange::single(Precision::Sec).including(Precision::Hour);
        assert_eq!(range.upper(), Precision::Hour);
        assert_eq!(range.lower(), Precision::Sec);
        assert_eq!(range.span(), 3);

        let range = PrecisionRange::single(Precision::Hour)
            .including(Precision::Sec)
            .including(Precision::Min);
        assert_eq!(range, PrecisionRange::new(Precision::Hour, Precision::Sec).unwrap());
    }

    #[test]
    fn test_inverted_range_cannot_be_built() {
        for upper in Precision::ALL {
            for lower in Precision::ALL.into_iter().filter(|l| l.rank() > upper.rank()) {
                assert_eq!(
                    PrecisionRange::new(upper, lower),
                    Err(TimeError::InvalidPrecisionRange { upper, lower })
                );
            }
        }
    }
}
