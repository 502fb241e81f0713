//! Ledger domain models, the in-memory snapshot container, and period math.

pub mod account;
pub mod budget;
pub mod category;
pub mod goal;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod settings;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use budget::{Budget, Recurrence};
pub use category::{Category, CategoryKind};
pub use goal::{Debt, SavingGoal};
pub use ledger::Ledger;
pub use period::{period_for, DateWindow};
pub use settings::Settings;
pub use transaction::{Expense, Income, Transfer};
