//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod card;
pub mod money;
pub mod session;

pub use account::{handle_account_command, AccountCommands};
pub use card::{handle_card_command, CardCommands};
pub use money::{
    handle_deposit_command, handle_send_command, handle_tax_command, handle_withdraw_command,
};
pub use session::Credentials;
