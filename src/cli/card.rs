//! Card CLI commands

use clap::Subcommand;

use crate::display::format_card_list;
use crate::error::{BankError, BankResult};
use crate::models::CardKind;
use crate::services::AccountService;
use crate::storage::SnapshotStore;

use super::session::{confirm, resolve_card, Credentials};

/// Card subcommands
#[derive(Subcommand)]
pub enum CardCommands {
    /// Issue a new card
    Add {
        /// Card type (standard, premium, virtual)
        kind: String,
    },
    /// List the account's cards
    List,
    /// Destroy a card
    Destroy {
        /// Card number or position from 'card list'
        card: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a card command
pub fn handle_card_command<S: SnapshotStore + ?Sized>(
    store: &S,
    credentials: &Credentials,
    cmd: CardCommands,
) -> BankResult<()> {
    let service = AccountService::new(store);
    let mut account = credentials.sign_in(store)?;

    match cmd {
        CardCommands::Add { kind } => {
            let kind = CardKind::parse(&kind).ok_or_else(|| {
                BankError::Validation(format!(
                    "Invalid card type: '{}'. Valid types: standard, premium, virtual",
                    kind
                ))
            })?;

            let card = service.add_card(&mut account, kind)?;
            println!("Created {} card {}", card.kind, card.number);
            println!("  Balance: {:.2}", card.balance);
        }

        CardCommands::List => {
            print!("{}", format_card_list(&account.cards));
        }

        CardCommands::Destroy { card, yes } => {
            let number = resolve_card(&account, &card)?;

            if !confirm(&format!("Destroy card {}?", number), yes)? {
                println!("Aborted.");
                return Ok(());
            }

            let removed = service.destroy_card(&mut account, &number)?;
            println!("Destroyed card: {}", removed);
        }
    }

    Ok(())
}
