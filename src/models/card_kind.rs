//! Card variants and their tax schedules
//!
//! Every card belongs to one of three variants. A variant fixes the card's
//! starting balance and the tax charged on each kind of balance operation.
//! Taxes are `amount * percent / 100 + fixed`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A balance operation that can be taxed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Taking money off the card
    Withdraw,
    /// Putting money on the card (also applies to incoming transfers)
    Deposit,
    /// Sending money to another card
    Send,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Withdraw => "withdraw",
            Self::Deposit => "deposit",
            Self::Send => "send",
        })
    }
}

/// Percentage plus fixed fee
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaxRate {
    pub percent: f64,
    pub fixed: f64,
}

impl TaxRate {
    /// No tax at all
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(percent: f64, fixed: f64) -> Self {
        Self { percent, fixed }
    }

    pub const fn percent(percent: f64) -> Self {
        Self::new(percent, 0.0)
    }

    pub const fn fixed(fixed: f64) -> Self {
        Self::new(0.0, fixed)
    }

    /// Tax owed on `amount`
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.percent / 100.0 + self.fixed
    }
}

/// The three tax rates of a card variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxSchedule {
    pub withdraw: TaxRate,
    pub deposit: TaxRate,
    pub send: TaxRate,
}

impl TaxSchedule {
    /// Rate applied to the given operation
    pub fn rate(&self, operation: Operation) -> TaxRate {
        match operation {
            Operation::Withdraw => self.withdraw,
            Operation::Deposit => self.deposit,
            Operation::Send => self.send,
        }
    }
}

const STANDARD_SCHEDULE: TaxSchedule = TaxSchedule {
    withdraw: TaxRate::percent(5.0),
    deposit: TaxRate::percent(2.0),
    send: TaxRate::fixed(20.0),
};

const PREMIUM_SCHEDULE: TaxSchedule = TaxSchedule {
    withdraw: TaxRate::percent(4.0),
    deposit: TaxRate::fixed(10.0),
    send: TaxRate::percent(10.0),
};

const VIRTUAL_SCHEDULE: TaxSchedule = TaxSchedule {
    withdraw: TaxRate::percent(88.0),
    deposit: TaxRate::fixed(1.0),
    send: TaxRate::fixed(1.0),
};

/// Card variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Standard,
    Premium,
    Virtual,
}

impl CardKind {
    /// All variants, in menu order
    pub fn all() -> &'static [CardKind] {
        &[Self::Standard, Self::Premium, Self::Virtual]
    }

    /// Balance a freshly issued card starts with
    pub fn start_balance(&self) -> f64 {
        match self {
            Self::Standard => 50.0,
            Self::Premium => 100.0,
            Self::Virtual => 150.0,
        }
    }

    /// Tax table of this variant
    pub fn schedule(&self) -> &'static TaxSchedule {
        match self {
            Self::Standard => &STANDARD_SCHEDULE,
            Self::Premium => &PREMIUM_SCHEDULE,
            Self::Virtual => &VIRTUAL_SCHEDULE,
        }
    }

    /// Tax owed for `operation` on `amount`
    pub fn compute_tax(&self, operation: Operation, amount: f64) -> f64 {
        self.schedule().rate(operation).apply(amount)
    }

    /// Parse a variant name, accepting the legacy names as well
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "usual" => Some(Self::Standard),
            "premium" | "capitalist" => Some(Self::Premium),
            "virtual" => Some(Self::Virtual),
            _ => None,
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Standard => "Standard",
            Self::Premium => "Premium",
            Self::Virtual => "Virtual",
        })
    }
}
