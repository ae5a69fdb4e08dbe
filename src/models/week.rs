//! Week-start day
//!
//! The budget accrues once per aligned week. Which weekday opens a week is
//! configurable and travels across the storage boundary as an ISO number
//! (1 = Monday .. 7 = Sunday).

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpendableError;

/// The weekday on which each budget week begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStart(Weekday);

impl WeekStart {
    pub const MONDAY: WeekStart = WeekStart(Weekday::Mon);
    pub const SUNDAY: WeekStart = WeekStart(Weekday::Sun);

    pub const fn new(day: Weekday) -> Self {
        Self(day)
    }

    pub const fn weekday(&self) -> Weekday {
        self.0
    }

    /// ISO day number, 1 (Monday) through 7 (Sunday)
    pub fn iso_number(&self) -> u8 {
        self.0.number_from_monday() as u8
    }

    /// Build from an ISO day number
    pub fn from_iso_number(n: u8) -> Option<Self> {
        let day = match n {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            7 => Weekday::Sun,
            _ => return None,
        };
        Some(Self(day))
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        Self::MONDAY
    }
}

impl From<Weekday> for WeekStart {
    fn from(day: Weekday) -> Self {
        Self(day)
    }
}

impl From<WeekStart> for u8 {
    fn from(start: WeekStart) -> Self {
        start.iso_number()
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_iso_number(n).ok_or_else(|| format!("day of week must be 1-7, got {}", n))
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeekStart {
    type Err = SpendableError;

    /// Accepts "1".."7", "mon", "monday", "Mon", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::from_iso_number(n).ok_or_else(|| {
                SpendableError::Validation(format!("Day of week must be 1-7, got {}", n))
            });
        }
        s.parse::<Weekday>()
            .map(Self)
            .map_err(|_| SpendableError::Validation(format!("Unknown day of week: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_monday() {
        assert_eq!(WeekStart::default().weekday(), Weekday::Mon);
        assert_eq!(WeekStart::default().iso_number(), 1);
    }

    #[test]
    fn test_iso_numbers_round_trip() {
        for n in 1..=7u8 {
            let start = WeekStart::from_iso_number(n).unwrap();
            assert_eq!(start.iso_number(), n);
        }
        assert!(WeekStart::from_iso_number(0).is_none());
        assert!(WeekStart::from_iso_number(8).is_none());
        assert_eq!(WeekStart::SUNDAY.iso_number(), 7);
    }

    #[test]
    fn test_parse_names_and_numbers() {
        assert_eq!("sun".parse::<WeekStart>().unwrap(), WeekStart::SUNDAY);
        assert_eq!("Sunday".parse::<WeekStart>().unwrap(), WeekStart::SUNDAY);
        assert_eq!("3".parse::<WeekStart>().unwrap().weekday(), Weekday::Wed);
        assert!("9".parse::<WeekStart>().unwrap_err().is_validation());
        assert!("someday".parse::<WeekStart>().is_err());
    }

    #[test]
    fn test_serializes_as_iso_number() {
        let json = serde_json::to_string(&WeekStart::SUNDAY).unwrap();
        assert_eq!(json, "7");
        let back: WeekStart = serde_json::from_str("5").unwrap();
        assert_eq!(back.weekday(), Weekday::Fri);
        assert!(serde_json::from_str::<WeekStart>("0").is_err());
    }
}
