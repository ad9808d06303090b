//! Core data models for CardBank
//!
//! Accounts, cards, card numbers and the per-variant tax schedules.

pub mod account;
pub mod card;
pub mod card_kind;
pub mod card_number;

pub use account::{Account, NewAccount};
pub use card::{ensure_amount, Card, CardReceipt, TransferReceipt};
pub use card_kind::{CardKind, Operation, TaxRate, TaxSchedule};
pub use card_number::{CardNumber, CardNumberError, CARD_NUMBER_LENGTH};
