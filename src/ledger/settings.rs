use serde::{Deserialize, Serialize};

use crate::currency::{Currency, RateTable};
use crate::errors::FinanceError;

/// Currency configuration and the accounting-period anchor day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub base_currency: Currency,
    pub month_start_day: u32,
    pub exchange_rates: RateTable,
}

impl Settings {
    pub fn rate_of(&self, currency: Currency) -> f64 {
        self.exchange_rates.rate_of(currency)
    }

    pub fn convert_to_base(&self, amount: f64, currency: Currency) -> f64 {
        self.exchange_rates.convert_to_base(amount, currency)
    }

    pub fn validate(&self) -> Result<(), FinanceError> {
        if !(1..=31).contains(&self.month_start_day) {
            return Err(FinanceError::Validation(format!(
                "month_start_day must be within 1-31, got {}",
                self.month_start_day
            )));
        }
        self.exchange_rates.validate()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_currency: Currency::USD,
            month_start_day: 25,
            exchange_rates: RateTable::seed(),
        }
    }
}
