//! Argument parsing shared by the command handlers

use chrono::{DateTime, Local, NaiveDate};

use crate::engine::local_midnight;
use crate::error::{SpendableError, SpendableResult};
use crate::models::{Money, WeekStart};

/// Parse a user-typed amount such as `12`, `12.5` or `$12.50`
pub fn parse_amount(input: &str) -> SpendableResult<Money> {
    Money::parse(input).map_err(|e| SpendableError::Validation(e.to_string()))
}

/// Parse `--start-day`, falling back to the configured default
pub fn parse_week_start(input: Option<&str>, default: WeekStart) -> SpendableResult<WeekStart> {
    match input {
        Some(day) => day.parse(),
        None => Ok(default),
    }
}

/// Parse a date argument into a local instant
///
/// `YYYY-MM-DD` means local midnight of that day; anything else must be
/// RFC 3339.
pub fn parse_date(input: &str) -> SpendableResult<DateTime<Local>> {
    let input = input.trim();

    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(local_midnight(day, &Local));
    }

    DateTime::parse_from_rfc3339(input)
        .map(|instant| instant.with_timezone(&Local))
        .map_err(|_| {
            SpendableError::Validation(format!(
                "Invalid date '{}': expected YYYY-MM-DD or RFC 3339",
                input
            ))
        })
}

/// `parse_date` for an optional argument
pub fn parse_optional_date(input: Option<&str>) -> SpendableResult<Option<DateTime<Local>>> {
    input.map(parse_date).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Utc};

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert_eq!(parse_amount("$3").unwrap(), Money::from_units(3));
        assert!(parse_amount("twelve").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_week_start() {
        assert_eq!(parse_week_start(None, WeekStart::SUNDAY).unwrap(), WeekStart::SUNDAY);
        assert_eq!(parse_week_start(Some("7"), WeekStart::MONDAY).unwrap(), WeekStart::SUNDAY);
        assert_eq!(parse_week_start(Some("mon"), WeekStart::SUNDAY).unwrap(), WeekStart::MONDAY);
        assert!(parse_week_start(Some("8"), WeekStart::MONDAY).is_err());
    }

    #[test]
    fn test_plain_date_is_local_midnight() {
        let parsed = parse_date("2024-03-05").unwrap();
        assert_eq!(parsed.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_rfc3339_keeps_instant() {
        let parsed = parse_date("2024-03-05T10:15:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 5, 10, 15, 0).unwrap());
    }

    #[test]
    fn test_bad_dates() {
        assert!(parse_date("05/03/2024").unwrap_err().is_validation());
        assert!(parse_date("2024-02-30").is_err());
        assert_eq!(parse_optional_date(None).unwrap(), None);
    }
}
