//! Goal display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Goal, ProgressSnapshot};

use super::{format_money, format_total};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Target Date")]
    target_date: String,
    #[tabled(rename = "Target Amount")]
    target_amount: String,
}

pub fn format_goal_list(goals: &[Goal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No goals found.".to_string();
    }

    let rows = goals.iter().map(|goal| GoalRow {
        id: goal.id.value(),
        name: goal.name.clone(),
        target_date: goal.target_date.to_string(),
        target_amount: format_money(goal.target_amount, symbol),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format the totals behind goal progress
pub fn format_progress(snapshot: &ProgressSnapshot, goals: &[Goal], symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Progress as of {}\n", snapshot.as_of));
    output.push_str(&format!(
        "  Total expenses: {}\n",
        format_total(snapshot.total_expenses, symbol)
    ));
    output.push_str(&format!(
        "  Total income:   {}\n",
        format_total(snapshot.total_income, symbol)
    ));
    output.push_str(&format!(
        "  Net income:     {}\n",
        format_total(snapshot.net_income, symbol)
    ));

    if !goals.is_empty() {
        output.push('\n');
        output.push_str(&format_goal_list(goals, symbol));
        output.push('\n');
    }

    output
}
