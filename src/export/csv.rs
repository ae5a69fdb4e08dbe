//! CSV export of expenses and the chart series

use std::io::Write;

use chrono::SecondsFormat;

use crate::engine::ChartPoint;
use crate::error::SpendableResult;
use crate::models::{Expense, Money};

fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}

/// One row per expense: id, RFC 3339 date, name, amount
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> SpendableResult<usize> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["id", "date", "name", "amount"])?;

    for expense in expenses {
        out.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            expense.name.clone(),
            decimal(expense.amount),
        ])?;
    }

    out.flush()?;
    Ok(expenses.len())
}

/// One row per chart point: RFC 3339 instant, balance
pub fn export_chart_csv<W: Write>(points: &[ChartPoint], writer: W) -> SpendableResult<usize> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["at", "balance"])?;

    for point in points {
        out.write_record([
            point.at.to_rfc3339_opts(SecondsFormat::Secs, true),
            decimal(point.balance),
        ])?;
    }

    out.flush()?;
    Ok(points.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_expenses_with_quoting() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
        let expense = Expense::with_date("Dinner, drinks", Money::from_cents(4_205), at);

        let mut buffer = Vec::new();
        let rows = export_expenses_csv(std::slice::from_ref(&expense), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(rows, 1);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,date,name,amount"));
        let row = lines.next().unwrap();
        assert!(row.ends_with("2024-01-02T09:30:00Z,\"Dinner, drinks\",42.05"));
    }

    #[test]
    fn test_chart_negative_balance() {
        let at = Utc.with_ymd_and_hms(2024, 2, 12, 0, 0, 0).unwrap();
        let points = vec![ChartPoint { at, balance: Money::from_cents(-20_505) }];

        let mut buffer = Vec::new();
        export_chart_csv(&points, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["at,balance", "2024-02-12T00:00:00Z,-205.05"]);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(decimal(Money::from_cents(5)), "0.05");
        assert_eq!(decimal(Money::from_cents(-5)), "-0.05");
        assert_eq!(decimal(Money::from_units(12)), "12.00");
    }
}
