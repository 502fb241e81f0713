use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::FinanceError;

use super::{
    account::Account,
    budget::Budget,
    category::Category,
    goal::{Debt, SavingGoal},
    period::{period_for, DateWindow},
    settings::Settings,
    transaction::{Expense, Income, Transfer},
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The full in-memory snapshot of a user's finances. The ledger owns the
/// record collections; aggregation reads them through a shared reference and
/// never mutates.
///
/// Deleting a record does not cascade: references held by other records go
/// dangling and are resolved as "Unknown" (zero contribution) at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub saving_goals: Vec<SavingGoal>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub settings: Settings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            accounts: Vec::new(),
            categories: Vec::new(),
            expenses: Vec::new(),
            incomes: Vec::new(),
            transfers: Vec::new(),
            budgets: Vec::new(),
            saving_goals: Vec::new(),
            debts: Vec::new(),
            settings: Settings::default(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// The accounting period containing `today`, anchored to the configured
    /// month start day.
    pub fn current_period(&self, today: NaiveDate) -> DateWindow {
        period_for(today, self.settings.month_start_day)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }

    // Lookups.

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn income(&self, id: Uuid) -> Option<&Income> {
        self.incomes.iter().find(|i| i.id == id)
    }

    pub fn transfer(&self, id: Uuid) -> Option<&Transfer> {
        self.transfers.iter().find(|t| t.id == id)
    }

    pub fn budget(&self, id: Uuid) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn saving_goal(&self, id: Uuid) -> Option<&SavingGoal> {
        self.saving_goals.iter().find(|g| g.id == id)
    }

    pub fn debt(&self, id: Uuid) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    // Accounts.

    pub fn add_account(&mut self, account: Account) -> Result<Uuid, FinanceError> {
        if let Some(amount) = account.initial_amount {
            ensure_finite("account initial amount", amount)?;
        }
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        Ok(id)
    }

    pub fn update_account(&mut self, id: Uuid, mut account: Account) -> Result<(), FinanceError> {
        if let Some(amount) = account.initial_amount {
            ensure_finite("account initial amount", amount)?;
        }
        let slot = self
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("account {} not found", id)))?;
        account.id = id;
        *slot = account;
        self.touch();
        Ok(())
    }

    pub fn remove_account(&mut self, id: Uuid) -> Result<(), FinanceError> {
        remove_by(&mut self.accounts, "account", id, |a| a.id)?;
        self.touch();
        Ok(())
    }

    // Categories.

    pub fn add_category(&mut self, category: Category) -> Result<Uuid, FinanceError> {
        if let Some(amount) = category.budgeted_amount {
            ensure_non_negative("category budgeted amount", amount)?;
        }
        let id = category.id;
        self.categories.push(category);
        self.touch();
        Ok(id)
    }

    pub fn update_category(&mut self, id: Uuid, mut category: Category) -> Result<(), FinanceError> {
        if let Some(amount) = category.budgeted_amount {
            ensure_non_negative("category budgeted amount", amount)?;
        }
        let slot = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("category {} not found", id)))?;
        category.id = id;
        *slot = category;
        self.touch();
        Ok(())
    }

    pub fn remove_category(&mut self, id: Uuid) -> Result<(), FinanceError> {
        remove_by(&mut self.categories, "category", id, |c| c.id)?;
        self.touch();
        Ok(())
    }

    // Expenses.

    pub fn add_expense(&mut self, expense: Expense) -> Result<Uuid, FinanceError> {
        self.validate_expense(&expense)?;
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        Ok(id)
    }

    pub fn update_expense(&mut self, id: Uuid, mut expense: Expense) -> Result<(), FinanceError> {
        self.validate_expense(&expense)?;
        let slot = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("expense {} not found", id)))?;
        expense.id = id;
        *slot = expense;
        self.touch();
        Ok(())
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Result<(), FinanceError> {
        remove_by(&mut self.expenses, "expense", id, |e| e.id)?;
        self.touch();
        Ok(())
    }

    fn validate_expense(&self, expense: &Expense) -> Result<(), FinanceError> {
        ensure_positive("expense amount", expense.amount)?;
        if self.account(expense.account_id).is_none() {
            return Err(FinanceError::InvalidRef(format!(
                "expense references unknown account {}",
                expense.account_id
            )));
        }
        if let Some(category) = self.category(expense.category_id) {
            if !category.kind.allows_expense() {
                return Err(FinanceError::Validation(format!(
                    "category `{}` does not accept expenses",
                    category.name
                )));
            }
        }
        Ok(())
    }

    // Incomes.

    pub fn add_income(&mut self, income: Income) -> Result<Uuid, FinanceError> {
        self.validate_income(&income)?;
        let id = income.id;
        self.incomes.push(income);
        self.touch();
        Ok(id)
    }

    pub fn update_income(&mut self, id: Uuid, mut income: Income) -> Result<(), FinanceError> {
        self.validate_income(&income)?;
        let slot = self
            .incomes
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("income {} not found", id)))?;
        income.id = id;
        *slot = income;
        self.touch();
        Ok(())
    }

    pub fn remove_income(&mut self, id: Uuid) -> Result<(), FinanceError> {
        remove_by(&mut self.incomes, "income", id, |i| i.id)?;
        self.touch();
        Ok(())
    }

    fn validate_income(&self, income: &Income) -> Result<(), FinanceError> {
        ensure_finite("income amount", income.amount)?;
        if self.account(income.account_id).is_none() {
            return Err(FinanceError::InvalidRef(format!(
                "income references unknown account {}",
                income.account_id
            )));
        }
        if let Some(category_id) = income.category_id {
            if let Some(category) = self.category(category_id) {
                if !category.kind.allows_income() {
                    return Err(FinanceError::Validation(format!(
                        "category `{}` does not accept incomes",
                        category.name
                    )));
                }
            }
        }
        Ok(())
    }

    // Transfers.

    pub fn add_transfer(&mut self, transfer: Transfer) -> Result<Uuid, FinanceError> {
        self.validate_transfer(&transfer)?;
        let id = transfer.id;
        self.transfers.push(transfer);
        self.touch();
        Ok(id)
    }

    pub fn update_transfer(&mut self, id: Uuid, mut transfer: Transfer) -> Result<(), FinanceError> {
        self.validate_transfer(&transfer)?;
        let slot = self
            .transfers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("transfer {} not found", id)))?;
        transfer.id = id;
        *slot = transfer;
        self.touch();
        Ok(())
    }

    pub fn remove_transfer(&mut self, id: Uuid) -> Result<(), FinanceError> {
        remove_by(&mut self.transfers, "transfer", id, |t| t.id)?;
        self.touch();
        Ok(())
    }

    fn validate_transfer(&self, transfer: &Transfer) -> Result<(), FinanceError> {
        ensure_positive("transfer amount", transfer.amount)?;
        if transfer.from_account_id == transfer.to_account_id {
            return Err(FinanceError::Validation(
                "transfer source and destination accounts must differ".into(),
            ));
        }
        for account_id in [transfer.from_account_id, transfer.to_account_id] {
            if self.account(account_id).is_none() {
                return Err(FinanceError::InvalidRef(format!(
                    "transfer references unknown account {}",
                    account_id
                )));
            }
        }
        Ok(())
    }

    // Budgets.

    pub fn add_budget(&mut self, budget: Budget) -> Result<Uuid, FinanceError> {
        validate_budget(&budget)?;
        let id = budget.id;
        self.budgets.push(budget);
        self.touch();
        Ok(id)
    }

    pub fn update_budget(&mut self, id: Uuid, mut budget: Budget) -> Result<(), FinanceError> {
        validate_budget(&budget)?;
        let slot = self
            .budgets
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("budget {} not found", id)))?;
        budget.id = id;
        *slot = budget;
        self.touch();
        Ok(())
    }

    pub fn remove_budget(&mut self, id: Uuid) -> Result<(), FinanceError> {
        remove_by(&mut self.budgets, "budget", id, |b| b.id)?;
        self.touch();
        Ok(())
    }

    // Saving goals.

    pub fn add_saving_goal(&mut self, goal: SavingGoal) -> Result<Uuid, FinanceError> {
        validate_goal(&goal)?;
        let id = goal.id;
        self.saving_goals.push(goal);
        self.touch();
        Ok(id)
    }

    pub fn update_saving_goal(&mut self, id: Uuid, mut goal: SavingGoal) -> Result<(), FinanceError> {
        validate_goal(&goal)?;
        let slot = self
            .saving_goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("saving goal {} not found", id)))?;
        goal.id = id;
        *slot = goal;
        self.touch();
        Ok(())
    }

    pub fn remove_saving_goal(&mut self, id: Uuid) -> Result<(), FinanceError> {
        remove_by(&mut self.saving_goals, "saving goal", id, |g| g.id)?;
        self.touch();
        Ok(())
    }

    // Debts.

    pub fn add_debt(&mut self, debt: Debt) -> Result<Uuid, FinanceError> {
        validate_debt(&debt)?;
        let id = debt.id;
        self.debts.push(debt);
        self.touch();
        Ok(id)
    }

    pub fn update_debt(&mut self, id: Uuid, mut debt: Debt) -> Result<(), FinanceError> {
        validate_debt(&debt)?;
        let slot = self
            .debts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| FinanceError::InvalidRef(format!("debt {} not found", id)))?;
        debt.id = id;
        *slot = debt;
        self.touch();
        Ok(())
    }

    pub fn remove_debt(&mut self, id: Uuid) -> Result<(), FinanceError> {
        remove_by(&mut self.debts, "debt", id, |d| d.id)?;
        self.touch();
        Ok(())
    }

    // Settings.

    pub fn update_settings(&mut self, settings: Settings) -> Result<(), FinanceError> {
        settings.validate()?;
        self.settings = settings;
        self.touch();
        Ok(())
    }
}

fn remove_by<T>(
    items: &mut Vec<T>,
    what: &str,
    id: Uuid,
    key: impl Fn(&T) -> Uuid,
) -> Result<(), FinanceError> {
    let position = items
        .iter()
        .position(|item| key(item) == id)
        .ok_or_else(|| FinanceError::InvalidRef(format!("{} {} not found", what, id)))?;
    items.remove(position);
    Ok(())
}

fn validate_budget(budget: &Budget) -> Result<(), FinanceError> {
    ensure_non_negative("budget amount", budget.amount)?;
    if let Some(end) = budget.end_date {
        if end < budget.start_date {
            return Err(FinanceError::Validation(format!(
                "budget end date {} precedes start date {}",
                end, budget.start_date
            )));
        }
    }
    Ok(())
}

fn validate_goal(goal: &SavingGoal) -> Result<(), FinanceError> {
    ensure_positive("saving goal total", goal.total_amount)?;
    ensure_finite("saving goal current amount", goal.current_amount)?;
    if goal.end_date < goal.start_date {
        return Err(FinanceError::Validation(format!(
            "saving goal end date {} precedes start date {}",
            goal.end_date, goal.start_date
        )));
    }
    Ok(())
}

fn validate_debt(debt: &Debt) -> Result<(), FinanceError> {
    ensure_non_negative("debt total", debt.total_amount)?;
    ensure_finite("debt balance", debt.current_balance)?;
    if let Some(rate) = debt.interest_rate {
        ensure_non_negative("debt interest rate", rate)?;
    }
    Ok(())
}

fn ensure_finite(what: &str, value: f64) -> Result<(), FinanceError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FinanceError::Validation(format!(
            "{} must be a finite number",
            what
        )))
    }
}

fn ensure_positive(what: &str, value: f64) -> Result<(), FinanceError> {
    ensure_finite(what, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(FinanceError::Validation(format!(
            "{} must be positive, got {}",
            what, value
        )))
    }
}

fn ensure_non_negative(what: &str, value: f64) -> Result<(), FinanceError> {
    ensure_finite(what, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(FinanceError::Validation(format!(
            "{} must not be negative, got {}",
            what, value
        )))
    }
}
