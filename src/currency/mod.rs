use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;

/// The closed set of supported ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    MXN,
    ARS,
    COP,
    CLP,
    CHF,
}

impl Currency {
    pub const ALL: [Currency; 9] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::MXN,
        Currency::ARS,
        Currency::COP,
        Currency::CLP,
        Currency::CHF,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::MXN => "MXN",
            Currency::ARS => "ARS",
            Currency::COP => "COP",
            Currency::CLP => "CLP",
            Currency::CHF => "CHF",
        }
    }

    /// Display symbol; falls back to the code for currencies without a
    /// conventional single-character symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::MXN => "MX$",
            Currency::ARS => "AR$",
            Currency::COP => "CO$",
            Currency::CLP => "CL$",
            Currency::CHF => "CHF",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = FinanceError;

    /// Case-sensitive exact match against the supported set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FinanceError::Validation(format!("unsupported currency `{}`", s)))
    }
}

/// Direct multipliers into the base currency: one unit of `currency` equals
/// `rate` units of base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RateTable(HashMap<Currency, f64>);

impl RateTable {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Seed rates shipped with a fresh install.
    pub fn seed() -> Self {
        let mut rates = HashMap::new();
        rates.insert(Currency::USD, 1.0);
        rates.insert(Currency::EUR, 1.08);
        rates.insert(Currency::GBP, 1.27);
        rates.insert(Currency::JPY, 0.0064);
        rates.insert(Currency::MXN, 0.058);
        rates.insert(Currency::ARS, 0.0011);
        rates.insert(Currency::COP, 0.00026);
        rates.insert(Currency::CLP, 0.0011);
        rates.insert(Currency::CHF, 1.11);
        Self(rates)
    }

    pub fn set(&mut self, currency: Currency, rate: f64) {
        self.0.insert(currency, rate);
    }

    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.0.get(&currency).copied()
    }

    /// Multiplier for `currency`. An unlisted currency is treated as parity
    /// with base and logged as a data-integrity notice.
    pub fn rate_of(&self, currency: Currency) -> f64 {
        match self.0.get(&currency) {
            Some(rate) => *rate,
            None => {
                tracing::warn!(
                    currency = currency.as_str(),
                    "no exchange rate configured, assuming parity with base"
                );
                1.0
            }
        }
    }

    /// Converts `amount` denominated in `currency` into the base currency.
    pub fn convert_to_base(&self, amount: f64, currency: Currency) -> f64 {
        amount * self.rate_of(currency)
    }

    pub fn validate(&self) -> Result<(), FinanceError> {
        for (currency, rate) in &self.0 {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(FinanceError::Validation(format!(
                    "exchange rate for {} must be a non-negative number, got {}",
                    currency, rate
                )));
            }
        }
        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::seed()
    }
}
