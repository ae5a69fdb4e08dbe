//! Running-balance chart as a text table with bars

use super::{date, money};
use crate::config::Settings;
use crate::engine::ChartPoint;

const BAR_WIDTH: i128 = 30;

pub fn format_chart(points: &[ChartPoint], settings: &Settings) -> String {
    if points.is_empty() {
        return "Nothing to chart yet. Configure a non-zero weekly budget first.".to_string();
    }

    let peak = points
        .iter()
        .map(|p| i128::from(p.balance.cents()).abs())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut output = format!("{:<10}  {:>12}  Balance\n", "Date", "Amount");
    output.push_str(&format!("{:-<10}  {:->12}  {:-<width$}\n", "", "", "", width = BAR_WIDTH as usize));

    for point in points {
        let cents = point.balance.cents();
        let len = (i128::from(cents).abs() * BAR_WIDTH / peak) as usize;
        let bar = if cents < 0 { "░".repeat(len) } else { "█".repeat(len) };

        output.push_str(&format!(
            "{:<10}  {:>12}  {}\n",
            date(&point.at, settings),
            money(point.balance, settings),
            bar
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_chart() {
        assert!(format_chart(&[], &Settings::default()).starts_with("Nothing to chart"));
    }

    #[test]
    fn test_extreme_balances_fit_the_bar() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let points = vec![
            ChartPoint { at, balance: Money::from_cents(i64::MAX) },
            ChartPoint { at, balance: Money::from_cents(i64::MIN) },
        ];

        let output = format_chart(&points, &Settings::default());
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[2].ends_with(&"█".repeat(29)));
        assert!(lines[3].ends_with(&"░".repeat(30)));
    }

    #[test]
    fn test_bars_scale_to_peak() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let points = vec![
            ChartPoint { at, balance: Money::from_units(100) },
            ChartPoint { at, balance: Money::from_units(-50) },
        ];

        let output = format_chart(&points, &Settings::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].ends_with(&"█".repeat(30)));
        assert!(lines[3].ends_with(&"░".repeat(15)));
        assert!(lines[3].contains("-$50.00"));
    }
}
