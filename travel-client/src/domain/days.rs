//! Operating-days type for scheduled transportation.

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid operating-day set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid operating days: {reason}")]
pub struct InvalidOperatingDays {
    reason: &'static str,
}

/// The set of ISO weekdays (1 = Monday .. 7 = Sunday) a transportation
/// operates on.
///
/// The set is non-empty, duplicate-free, and stored sorted. On the wire it
/// is a plain JSON array of day numbers, e.g. `[1, 3, 5]`.
///
/// # Examples
///
/// ```
/// use travel_client::domain::OperatingDays;
///
/// let weekdays = OperatingDays::new(vec![5, 1, 3]).unwrap();
/// assert_eq!(weekdays.days(), &[1, 3, 5]);
///
/// // Out-of-range and duplicate days are rejected
/// assert!(OperatingDays::new(vec![0]).is_err());
/// assert!(OperatingDays::new(vec![8]).is_err());
/// assert!(OperatingDays::new(vec![2, 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct OperatingDays(Vec<u8>);

impl OperatingDays {
    /// Build a day set from ISO weekday numbers.
    ///
    /// Input order does not matter; the result is sorted. Empty sets,
    /// numbers outside 1..=7, and duplicates are rejected.
    pub fn new(mut days: Vec<u8>) -> Result<Self, InvalidOperatingDays> {
        if days.is_empty() {
            return Err(InvalidOperatingDays {
                reason: "must contain at least one day",
            });
        }

        for &d in &days {
            if !(1..=7).contains(&d) {
                return Err(InvalidOperatingDays {
                    reason: "days must be in 1..=7",
                });
            }
        }

        days.sort_unstable();
        if days.windows(2).any(|w| w[0] == w[1]) {
            return Err(InvalidOperatingDays {
                reason: "days must be unique",
            });
        }

        Ok(OperatingDays(days))
    }

    /// Every day of the week.
    pub fn daily() -> Self {
        OperatingDays(vec![1, 2, 3, 4, 5, 6, 7])
    }

    /// The days in ascending order.
    pub fn days(&self) -> &[u8] {
        &self.0
    }

    /// Whether the set contains the given ISO weekday number.
    pub fn contains(&self, day: u8) -> bool {
        self.0.binary_search(&day).is_ok()
    }
}

impl TryFrom<Vec<u8>> for OperatingDays {
    type Error = InvalidOperatingDays;

    fn try_from(days: Vec<u8>) -> Result<Self, Self::Error> {
        OperatingDays::new(days)
    }
}

impl From<OperatingDays> for Vec<u8> {
    fn from(days: OperatingDays) -> Self {
        days.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_input() {
        let days = OperatingDays::new(vec![7, 1, 4]).unwrap();
        assert_eq!(days.days(), &[1, 4, 7]);
    }

    #[test]
    fn rejects_empty() {
        assert!(OperatingDays::new(vec![]).is_err());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(OperatingDays::new(vec![0, 1]).is_err());
        assert!(OperatingDays::new(vec![1, 8]).is_err());
    }

    #[test]
    fn rejects_duplicates() {
        assert!(OperatingDays::new(vec![3, 3]).is_err());
    }

    #[test]
    fn contains_day() {
        let days = OperatingDays::new(vec![2, 6]).unwrap();
        assert!(days.contains(2));
        assert!(days.contains(6));
        assert!(!days.contains(1));
    }

    #[test]
    fn daily_covers_week() {
        let days = OperatingDays::daily();
        assert_eq!(days.days().len(), 7);
        assert!((1..=7).all(|d| days.contains(d)));
    }

    #[test]
    fn wire_roundtrip() {
        let days = OperatingDays::new(vec![1, 5]).unwrap();
        let json = serde_json::to_string(&days).unwrap();
        assert_eq!(json, "[1,5]");

        let parsed: OperatingDays = serde_json::from_str("[5,1]").unwrap();
        assert_eq!(parsed, days);
    }

    #[test]
    fn wire_rejects_invalid() {
        assert!(serde_json::from_str::<OperatingDays>("[]").is_err());
        assert!(serde_json::from_str::<OperatingDays>("[9]").is_err());
    }
}
