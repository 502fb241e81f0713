use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::period::{shift_month, shift_year, DateWindow};

/// A spending ceiling in base currency over a recurrence window. Expenses
/// count against a budget by direct assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    pub amount: f64,
    pub recurrence: Recurrence,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Budget {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        recurrence: Recurrence,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            account_id: None,
            category_id: None,
            amount,
            recurrence,
            start_date,
            end_date: None,
        }
    }

    /// The first recurrence window, anchored at the budget's start date.
    pub fn window(&self) -> DateWindow {
        let end = match self.recurrence {
            Recurrence::Weekly => self.start_date + Duration::weeks(1),
            Recurrence::Monthly => shift_month(self.start_date, 1),
            Recurrence::Yearly => shift_year(self.start_date, 1),
        };
        DateWindow {
            start: self.start_date,
            end: end - Duration::days(1),
        }
    }
}

/// Supported budget recurrence cadences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Weekly,
    Monthly,
    Yearly,
}
