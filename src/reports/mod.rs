//! Pure reporting queries over a ledger snapshot.
//!
//! Every function here is a deterministic function of its inputs: no hidden
//! state, no I/O, no mutation. Records pointing at deleted entities contribute
//! zero and emit a data-integrity warning instead of failing the whole
//! aggregate.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::currency::Currency;
use crate::ledger::{DateWindow, Debt, Ledger, SavingGoal, Transfer};

/// All-time account balance in base currency, transfers folded in.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountBalance {
    pub account_id: Uuid,
    pub incomes: f64,
    pub expenses: f64,
    pub transfers_in: f64,
    pub transfers_out: f64,
    pub balance: f64,
}

/// Converted spend per category within a period.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySpend {
    pub category_id: Uuid,
    pub name: String,
    pub total: f64,
}

/// Consumption of one budget within a period.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetStatus {
    pub budget_id: Uuid,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
    /// `percent_used` capped at 100 for progress bars.
    pub percent_display: f64,
    /// Uncapped overrun amount; zero while the budget holds.
    pub exceeded_by: f64,
    pub expense_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GoalProgress {
    pub goal_id: Uuid,
    pub percent: f64,
    /// Whole days until the goal's end date; negative once overdue.
    pub days_remaining: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DebtPayoff {
    pub debt_id: Uuid,
    pub percent_paid: f64,
    pub remaining_percent: f64,
}

/// One point of the dashboard flow chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyFlow {
    pub date: NaiveDate,
    pub expenses: f64,
    pub incomes: f64,
}

/// Headline totals for a period, in base currency.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodTotals {
    pub incomes: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Converts a record amount using its account's currency. A dangling account
/// reference contributes zero.
fn convert_via_account(ledger: &Ledger, account_id: Uuid, amount: f64, what: &str) -> f64 {
    match ledger.account(account_id) {
        Some(account) => ledger.settings.convert_to_base(amount, account.currency),
        None => {
            tracing::warn!(%account_id, what, "record references a deleted account, skipping");
            0.0
        }
    }
}

/// All-time balance of one account: opening balance plus incomes minus
/// expenses, with transfers debited from the source and credited to the
/// destination. Returns `None` for an unknown account.
pub fn account_balance(ledger: &Ledger, account_id: Uuid) -> Option<AccountBalance> {
    let account = ledger.account(account_id)?;
    let settings = &ledger.settings;
    let currency = account.currency;

    let incomes: f64 = ledger
        .incomes
        .iter()
        .filter(|i| i.account_id == account_id)
        .map(|i| settings.convert_to_base(i.amount, currency))
        .sum();
    let expenses: f64 = ledger
        .expenses
        .iter()
        .filter(|e| e.account_id == account_id)
        .map(|e| settings.convert_to_base(e.amount, currency))
        .sum();

    let mut transfers_in = 0.0;
    let mut transfers_out = 0.0;
    for transfer in &ledger.transfers {
        if transfer.from_account_id == account_id {
            transfers_out += settings.convert_to_base(transfer.amount, currency);
        }
        if transfer.to_account_id == account_id {
            let received = transfer_received_amount(ledger, transfer);
            transfers_in += settings.convert_to_base(received, currency);
        }
    }

    let initial = settings.convert_to_base(account.opening_balance(), currency);
    Some(AccountBalance {
        account_id,
        incomes,
        expenses,
        transfers_in,
        transfers_out,
        balance: initial + incomes - expenses + transfers_in - transfers_out,
    })
}

/// Per-category expense totals within `window`, largest first. Expenses whose
/// category was deleted are grouped under their dangling id with the name
/// `"Unknown"`.
pub fn spend_by_category(ledger: &Ledger, window: DateWindow) -> Vec<CategorySpend> {
    let mut totals: HashMap<Uuid, f64> = HashMap::new();
    for expense in &ledger.expenses {
        if !window.contains(expense.date) {
            continue;
        }
        let base = convert_via_account(ledger, expense.account_id, expense.amount, "expense");
        *totals.entry(expense.category_id).or_insert(0.0) += base;
    }
    let mut rows: Vec<CategorySpend> = totals
        .into_iter()
        .map(|(category_id, total)| CategorySpend {
            category_id,
            name: ledger
                .category(category_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            total,
        })
        .collect();
    rows.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// Consumption of `budget` within `window`, counting directly assigned
/// expenses only.
pub fn budget_status(ledger: &Ledger, budget_id: Uuid, window: DateWindow) -> Option<BudgetStatus> {
    let budget = ledger.budget(budget_id)?;
    let mut spent = 0.0;
    let mut expense_count = 0;
    for expense in &ledger.expenses {
        if expense.budget_id != Some(budget.id) || !window.contains(expense.date) {
            continue;
        }
        spent += convert_via_account(ledger, expense.account_id, expense.amount, "expense");
        expense_count += 1;
    }
    let percent_used = if budget.amount > 0.0 {
        spent / budget.amount * 100.0
    } else {
        0.0
    };
    Some(BudgetStatus {
        budget_id: budget.id,
        spent,
        remaining: budget.amount - spent,
        percent_used,
        percent_display: percent_used.min(100.0),
        exceeded_by: (spent - budget.amount).max(0.0),
        expense_count,
    })
}

/// Status for every budget in the ledger.
pub fn budget_statuses(ledger: &Ledger, window: DateWindow) -> Vec<BudgetStatus> {
    ledger
        .budgets
        .iter()
        .filter_map(|b| budget_status(ledger, b.id, window))
        .collect()
}

pub fn goal_progress(goal: &SavingGoal, today: NaiveDate) -> GoalProgress {
    let percent = if goal.total_amount > 0.0 {
        (goal.current_amount / goal.total_amount * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    GoalProgress {
        goal_id: goal.id,
        percent,
        days_remaining: (goal.end_date - today).num_days(),
    }
}

pub fn debt_payoff(debt: &Debt) -> DebtPayoff {
    let percent_paid = if debt.total_amount > 0.0 {
        ((1.0 - debt.current_balance / debt.total_amount) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    DebtPayoff {
        debt_id: debt.id,
        percent_paid,
        remaining_percent: 100.0 - percent_paid,
    }
}

/// Converted expense and income totals for each calendar day of `window`.
pub fn daily_flow(ledger: &Ledger, window: DateWindow) -> Vec<DailyFlow> {
    window
        .days()
        .map(|date| {
            let expenses = ledger
                .expenses
                .iter()
                .filter(|e| e.date == date)
                .map(|e| convert_via_account(ledger, e.account_id, e.amount, "expense"))
                .sum();
            let incomes = ledger
                .incomes
                .iter()
                .filter(|i| i.date == date)
                .map(|i| convert_via_account(ledger, i.account_id, i.amount, "income"))
                .sum();
            DailyFlow {
                date,
                expenses,
                incomes,
            }
        })
        .collect()
}

/// Headline income/expense/net totals for `window`.
pub fn period_totals(ledger: &Ledger, window: DateWindow) -> PeriodTotals {
    let incomes: f64 = ledger
        .incomes
        .iter()
        .filter(|i| window.contains(i.date))
        .map(|i| convert_via_account(ledger, i.account_id, i.amount, "income"))
        .sum();
    let expenses: f64 = ledger
        .expenses
        .iter()
        .filter(|e| window.contains(e.date))
        .map(|e| convert_via_account(ledger, e.account_id, e.amount, "expense"))
        .sum();
    PeriodTotals {
        incomes,
        expenses,
        net: incomes - expenses,
    }
}

/// Amount the destination account receives, in its own currency. Same-currency
/// transfers pass through unchanged; otherwise the amount is converted to base
/// and back out at the destination rate. An account that no longer exists
/// falls back to the base currency.
pub fn transfer_received_amount(ledger: &Ledger, transfer: &Transfer) -> f64 {
    let from = currency_of(ledger, transfer.from_account_id);
    let to = currency_of(ledger, transfer.to_account_id);
    if from == to {
        return transfer.amount;
    }
    let in_base = ledger.settings.convert_to_base(transfer.amount, from);
    let to_rate = ledger.settings.rate_of(to);
    if to_rate == 0.0 {
        tracing::warn!(currency = to.as_str(), "zero exchange rate on transfer destination");
        return 0.0;
    }
    in_base / to_rate
}

fn currency_of(ledger: &Ledger, account_id: Uuid) -> Currency {
    match ledger.account(account_id) {
        Some(account) => account.currency,
        None => {
            tracing::warn!(%account_id, "transfer references a deleted account, assuming base currency");
            ledger.settings.base_currency
        }
    }
}
