use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorises ledger activity for budgeting and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub kind: CategoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budgeted_amount: Option<f64>,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            budgeted_amount: None,
        }
    }
}

/// Which transaction types may reference a category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
    Both,
}

impl CategoryKind {
    pub fn allows_expense(&self) -> bool {
        matches!(self, CategoryKind::Expense | CategoryKind::Both)
    }

    pub fn allows_income(&self) -> bool {
        matches!(self, CategoryKind::Income | CategoryKind::Both)
    }
}
