use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Currency;

/// A financial account holding transactions in a single currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Account {
    pub fn new(name: impl Into<String>, kind: AccountKind, currency: Currency) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            currency,
            initial_amount: None,
            note: None,
        }
    }

    pub fn with_initial_amount(mut self, amount: f64) -> Self {
        self.initial_amount = Some(amount);
        self
    }

    /// Opening balance in the account's own currency, zero when unset.
    pub fn opening_balance(&self) -> f64 {
        self.initial_amount.unwrap_or(0.0)
    }
}

/// Supported account types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    Savings,
    Brokerage,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Cash,
}
