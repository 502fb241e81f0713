use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An outflow from an account, denominated in that account's currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub amount: f64,
    pub account_id: Uuid,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<Uuid>,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        category_id: Uuid,
        amount: f64,
        account_id: Uuid,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category_id,
            amount,
            account_id,
            date,
            budget_id: None,
        }
    }

    /// Assigns the expense to a budget for direct consumption tracking.
    pub fn with_budget(mut self, budget_id: Uuid) -> Self {
        self.budget_id = Some(budget_id);
        self
    }
}

/// An inflow into an account, denominated in that account's currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl Income {
    pub fn new(name: impl Into<String>, amount: f64, account_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            date,
            account_id,
            category_id: None,
        }
    }
}

/// Moves money between two accounts. The stored amount is in the source
/// account's currency; the destination amount is derived at read time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub from_account_id: Uuid,
    pub to_account_id: Uuid,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transfer {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        from_account_id: Uuid,
        to_account_id: Uuid,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            from_account_id,
            to_account_id,
            date,
            note: None,
        }
    }
}
