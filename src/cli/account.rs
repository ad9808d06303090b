//! Account CLI commands
//!
//! Implements CLI commands for opening, showing and deleting an account.

use clap::Subcommand;

use crate::display::format_account_details;
use crate::error::{BankError, BankResult};
use crate::models::NewAccount;
use crate::services::{AccountService, AccountValidator};
use crate::storage::SnapshotStore;

use super::session::{confirm, Credentials};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account for --login
    Create {
        /// Display name (must start with a capital letter)
        #[arg(short, long)]
        name: String,
        /// Age in years (23-90)
        #[arg(short, long)]
        age: u32,
    },
    /// Show account details and cards
    Show,
    /// Delete the account and all of its cards
    Delete {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle an account command
pub fn handle_account_command<S: SnapshotStore + ?Sized>(
    store: &S,
    credentials: &Credentials,
    cmd: AccountCommands,
) -> BankResult<()> {
    let service = AccountService::new(store);

    match cmd {
        AccountCommands::Create { name, age } => {
            let new = NewAccount {
                login: credentials.login()?.to_string(),
                password: credentials.password()?,
                name,
                age,
            };

            let issues = AccountValidator::new(store).validate(&new)?;
            if !issues.is_empty() {
                let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
                return Err(BankError::Validation(messages.join("; ")));
            }

            let account = service.create(new)?;
            println!("Created account: {}", account.name);
            println!("  Login: {}", account.login);
            println!("Add a card with 'cardbank card add <standard|premium|virtual>'.");
        }

        AccountCommands::Show => {
            let account = credentials.sign_in(store)?;
            print!("{}", format_account_details(&account));
        }

        AccountCommands::Delete { yes } => {
            let account = credentials.sign_in(store)?;

            if !confirm(
                &format!("Delete account '{}' and all of its cards?", account.login),
                yes,
            )? {
                println!("Aborted.");
                return Ok(());
            }

            service.destroy(&account)?;
            println!("Deleted account: {}", account.login);
        }
    }

    Ok(())
}
