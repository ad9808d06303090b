//! Display formatting for terminal output
//!
//! Provides utilities for formatting accounts, cards and operation results
//! for terminal display.

pub mod account;
pub mod card;

pub use account::format_account_details;
pub use card::{
    format_card_list, format_deposit, format_tax_preview, format_transfer, format_withdrawal,
};
