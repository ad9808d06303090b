//! CLI handlers for withdrawals, deposits, transfers and tax previews

use crate::display::{format_deposit, format_tax_preview, format_transfer, format_withdrawal};
use crate::error::{BankError, BankResult};
use crate::models::CardKind;
use crate::services::AccountService;
use crate::storage::SnapshotStore;

use super::session::{parse_card_number, resolve_card, Credentials};

/// Handle the withdraw command
pub fn handle_withdraw_command<S: SnapshotStore + ?Sized>(
    store: &S,
    credentials: &Credentials,
    card: &str,
    amount: f64,
) -> BankResult<()> {
    let service = AccountService::new(store);
    let mut account = credentials.sign_in(store)?;
    let number = resolve_card(&account, card)?;

    let receipt = service.withdraw(&mut account, &number, amount)?;

    if let Some(card) = account.card(&number) {
        print!("{}", format_withdrawal(card, &receipt));
    }
    Ok(())
}

/// Handle the deposit command
pub fn handle_deposit_command<S: SnapshotStore + ?Sized>(
    store: &S,
    credentials: &Credentials,
    card: &str,
    amount: f64,
) -> BankResult<()> {
    let service = AccountService::new(store);
    let mut account = credentials.sign_in(store)?;
    let number = resolve_card(&account, card)?;

    let receipt = service.deposit(&mut account, &number, amount)?;

    if let Some(card) = account.card(&number) {
        print!("{}", format_deposit(card, &receipt));
    }
    Ok(())
}

/// Handle the send command
pub fn handle_send_command<S: SnapshotStore + ?Sized>(
    store: &S,
    credentials: &Credentials,
    from: &str,
    to: &str,
    amount: f64,
) -> BankResult<()> {
    let service = AccountService::new(store);
    let mut account = credentials.sign_in(store)?;
    let from = resolve_card(&account, from)?;
    let to = parse_card_number(to)?;

    let receipt = service.send_money(&mut account, &from, &to, amount)?;

    print!("{}", format_transfer(from.as_str(), to.as_str(), &receipt));
    Ok(())
}

/// Handle the tax preview command
pub fn handle_tax_command(kind: &str, amount: f64) -> BankResult<()> {
    let kind = CardKind::parse(kind).ok_or_else(|| {
        BankError::Validation(format!(
            "Invalid card type: '{}'. Valid types: standard, premium, virtual",
            kind
        ))
    })?;

    print!("{}", format_tax_preview(kind, amount));
    Ok(())
}
