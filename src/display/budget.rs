//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Budget, BudgetEvaluation, BudgetPeriod, BudgetSetOutcome};

use super::format_money;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly Limit")]
    limit: String,
}

#[derive(Tabled)]
struct EvaluationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl EvaluationRow {
    fn new(eval: &BudgetEvaluation, symbol: &str) -> Self {
        Self {
            category: eval.category.clone(),
            limit: format_money(eval.limit, symbol),
            spent: format_money(eval.spent, symbol),
            remaining: format_money(eval.remaining(), symbol),
            status: eval.status.to_string(),
        }
    }
}

pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n\nRun 'ledger budget set <category> <limit>' to add one."
            .to_string();
    }

    let rows = budgets.iter().map(|budget| BudgetRow {
        id: budget.id.value(),
        category: budget.category.clone(),
        limit: format_money(budget.monthly_limit, symbol),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Describe what `budget set` did
pub fn format_budget_outcome(outcome: &BudgetSetOutcome, symbol: &str) -> String {
    match outcome {
        BudgetSetOutcome::Created(budget) => format!(
            "Budget set: {} at {} per month",
            budget.category,
            format_money(budget.monthly_limit, symbol)
        ),
        BudgetSetOutcome::Replaced { before, after } => format!(
            "Budget updated: {} from {} to {} per month",
            after.category,
            format_money(before.monthly_limit, symbol),
            format_money(after.monthly_limit, symbol)
        ),
        BudgetSetOutcome::Kept(budget) => format!(
            "Budget unchanged: {} stays at {} per month",
            budget.category,
            format_money(budget.monthly_limit, symbol)
        ),
    }
}

/// Format one category's spending against its limit
pub fn format_evaluation(eval: &BudgetEvaluation, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget: {} ({})\n",
        eval.category,
        eval.period.format_friendly()
    ));
    output.push_str(&format!("  Limit:     {}\n", format_money(eval.limit, symbol)));
    output.push_str(&format!("  Spent:     {}\n", format_money(eval.spent, symbol)));
    output.push_str(&format!("  Remaining: {}\n", format_money(eval.remaining(), symbol)));
    output.push_str(&format!("  Status:    {}\n", eval.status));

    output
}

/// Format every budget's status for one month
pub fn format_evaluations(period: BudgetPeriod, evals: &[BudgetEvaluation], symbol: &str) -> String {
    if evals.is_empty() {
        return "No budgets set.".to_string();
    }

    let table = Table::new(evals.iter().map(|eval| EvaluationRow::new(eval, symbol)))
        .with(Style::psql())
        .to_string();

    format!("Budget status: {}\n{}", period.format_friendly(), table)
}
