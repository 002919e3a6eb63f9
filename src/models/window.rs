//! Rolling time window selector for trend analytics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Selects the lower bound of the monthly trend computation
///
/// The upper bound is always "now" (the caller's reference date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// The last six calendar months
    #[default]
    SixMonths,
    /// The last twelve calendar months
    OneYear,
    /// Everything on record
    AllTime,
}

impl TimeWindow {
    /// How many months to look back, or `None` for an unbounded window
    pub fn months_back(&self) -> Option<u32> {
        match self {
            Self::SixMonths => Some(6),
            Self::OneYear => Some(12),
            Self::AllTime => None,
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SixMonths => "Last 6 Months",
            Self::OneYear => "Last Year",
            Self::AllTime => "All Time",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for TimeWindow {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "6m" | "6months" | "six-months" => Ok(Self::SixMonths),
            "1y" | "year" | "1year" => Ok(Self::OneYear),
            "all" | "alltime" | "all-time" => Ok(Self::AllTime),
            other => Err(TrackerError::Validation(format!(
                "Unknown time window '{}', expected 6m, 1y, or all",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_six_months() {
        assert_eq!(TimeWindow::default(), TimeWindow::SixMonths);
    }

    #[test]
    fn test_months_back() {
        assert_eq!(TimeWindow::SixMonths.months_back(), Some(6));
        assert_eq!(TimeWindow::OneYear.months_back(), Some(12));
        assert_eq!(TimeWindow::AllTime.months_back(), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("6m".parse::<TimeWindow>().unwrap(), TimeWindow::SixMonths);
        assert_eq!("1y".parse::<TimeWindow>().unwrap(), TimeWindow::OneYear);
        assert_eq!("ALL".parse::<TimeWindow>().unwrap(), TimeWindow::AllTime);
        assert!("weekly".parse::<TimeWindow>().is_err());
    }
}
