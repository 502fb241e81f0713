use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings target in base currency. `current_amount` may exceed
/// `total_amount`; progress is clamped for display only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingGoal {
    pub id: Uuid,
    pub name: String,
    pub total_amount: f64,
    pub current_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SavingGoal {
    pub fn new(
        name: impl Into<String>,
        total_amount: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            total_amount,
            current_amount: 0.0,
            start_date,
            end_date,
        }
    }
}

/// An outstanding liability in base currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    pub current_balance: f64,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Debt {
    pub fn new(name: impl Into<String>, total_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            current_balance: total_amount,
            total_amount,
            interest_rate: None,
            due_date: None,
        }
    }
}
