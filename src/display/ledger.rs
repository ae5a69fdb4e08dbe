//! Expense, infusion and goal listings

use super::{column_width, date, money};
use crate::config::Settings;
use crate::models::{Expense, Goal, Infusion, Money};

pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let name_width = column_width(expenses.iter().map(|e| e.name.as_str()), 4);

    let mut output = format!(
        "{:<14}  {:<10}  {:<name_width$}  {:>12}\n",
        "ID", "Date", "Name", "Amount",
    );
    output.push_str(&format!(
        "{:-<14}  {:-<10}  {:-<name_width$}  {:->12}\n",
        "", "", "", "",
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<14}  {:<10}  {:<name_width$}  {:>12}\n",
            expense.id.to_string(),
            date(&expense.date, settings),
            expense.name,
            money(expense.amount, settings),
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "{:<14}  {:<10}  {:<name_width$}  {:>12}\n",
        "",
        "",
        "Total",
        money(total, settings),
    ));

    output
}

pub fn format_infusion_list(infusions: &[Infusion], settings: &Settings) -> String {
    if infusions.is_empty() {
        return "No infusions recorded.".to_string();
    }

    let mut output = format!("{:<14}  {:<10}  {:>12}  {}\n", "ID", "Date", "Amount", "Note");
    output.push_str(&format!("{:-<14}  {:-<10}  {:->12}  {:-<4}\n", "", "", "", ""));

    for infusion in infusions {
        output.push_str(&format!(
            "{:<14}  {:<10}  {:>12}  {}\n",
            infusion.id.to_string(),
            date(&infusion.date, settings),
            money(infusion.amount, settings),
            infusion.note,
        ));
    }

    output
}

pub fn format_goal_list(goals: &[Goal], settings: &Settings) -> String {
    if goals.is_empty() {
        return "No goals yet.".to_string();
    }

    let title_width = column_width(goals.iter().map(|g| g.title.as_str()), 5);

    let mut output = format!(
        "{:<15}  {:<title_width$}  {:>12}  {:>12}  {:>6}\n",
        "ID", "Title", "Funded", "Target", "Done",
    );
    output.push_str(&format!(
        "{:-<15}  {:-<title_width$}  {:->12}  {:->12}  {:->6}\n",
        "", "", "", "", "",
    ));

    for goal in goals {
        let marker = if goal.is_overfunded() {
            " (over)"
        } else if goal.is_fully_funded() {
            " ✓"
        } else {
            ""
        };

        output.push_str(&format!(
            "{:<15}  {:<title_width$}  {:>12}  {:>12}  {:>5}%{}\n",
            goal.id.to_string(),
            goal.title,
            money(goal.funded_amount, settings),
            money(goal.target_amount, settings),
            goal.progress_percent(),
            marker,
        ));
    }

    output
}
