//! Transfer service
//!
//! Coordinates card-to-card transfers. Both sides of a transfer are resolved
//! against the full account snapshot before any balance changes, and both
//! sides are persisted together in a single snapshot write.

use crate::error::{BankError, BankResult};
use crate::models::{ensure_amount, Account, Card, CardNumber, TransferReceipt};
use crate::storage::SnapshotStore;

/// Service for moving money between cards
pub struct TransferService<'a, S: SnapshotStore + ?Sized> {
    store: &'a S,
}

/// Result of a completed transfer
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub receipt: TransferReceipt,
    /// Sender account as persisted after the transfer
    pub sender: Account,
    /// Login of the account that owns the recipient card
    pub recipient_login: String,
}

/// Where a card lives inside a loaded snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardSlot {
    account: usize,
    card: usize,
}

impl<'a, S: SnapshotStore + ?Sized> TransferService<'a, S> {
    /// Create a new transfer service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Send `amount` from the sender's `from` card to the card numbered `to`
    ///
    /// The recipient may belong to any persisted account, including the
    /// sender's own.
    pub fn send(
        &self,
        sender_login: &str,
        from: &CardNumber,
        to: &CardNumber,
        amount: f64,
    ) -> BankResult<TransferOutcome> {
        ensure_amount(amount)?;
        if from == to {
            return Err(BankError::Validation(
                "Cannot send money to the same card".into(),
            ));
        }

        let mut accounts = self.store.load_all()?;

        let sender = locate_sender(&accounts, sender_login, from)?;
        let recipient = locate_owner(&accounts, to).ok_or_else(|| {
            tracing::warn!(card = %to, "transfer recipient is not owned by any account");
            BankError::RecipientAccountNotFound(to.to_string())
        })?;

        let (from_card, to_card) = card_pair_mut(&mut accounts, sender, recipient)?;
        let receipt = from_card.send_to(to_card, amount).inspect_err(|e| {
            tracing::warn!(from = %from, to = %to, amount, error = %e, "transfer rejected");
        })?;

        self.store.save_all(&accounts)?;

        tracing::info!(
            from = %from,
            to = %to,
            amount,
            send_tax = receipt.send_tax,
            deposit_tax = receipt.deposit_tax,
            "transfer completed"
        );

        let recipient_login = accounts[recipient.account].login.clone();
        let sender = accounts.swap_remove(sender.account);

        Ok(TransferOutcome {
            receipt,
            sender,
            recipient_login,
        })
    }

    /// Find any persisted card by number, with the login of its owner
    pub fn find_card(&self, number: &CardNumber) -> BankResult<Option<(String, Card)>> {
        let accounts = self.store.load_all()?;
        Ok(locate_owner(&accounts, number).map(|slot| {
            let account = &accounts[slot.account];
            (account.login.clone(), account.cards[slot.card].clone())
        }))
    }
}

fn locate_sender(accounts: &[Account], login: &str, number: &CardNumber) -> BankResult<CardSlot> {
    let account = accounts
        .iter()
        .position(|a| a.login == login)
        .ok_or_else(|| BankError::account_not_found(login))?;
    let card = accounts[account]
        .card_position(number)
        .ok_or_else(|| BankError::card_not_found(number.to_string()))?;
    Ok(CardSlot { account, card })
}

fn locate_owner(accounts: &[Account], number: &CardNumber) -> Option<CardSlot> {
    accounts.iter().enumerate().find_map(|(account, a)| {
        a.card_position(number)
            .map(|card| CardSlot { account, card })
    })
}

/// Borrow two distinct cards of the snapshot mutably at once
fn card_pair_mut(
    accounts: &mut [Account],
    a: CardSlot,
    b: CardSlot,
) -> BankResult<(&mut Card, &mut Card)> {
    if a.account == b.account {
        let cards = &mut accounts[a.account].cards;
        two_mut(cards, a.card, b.card)
    } else {
        let (first, second) = two_mut(accounts, a.account, b.account)?;
        Ok((&mut first.cards[a.card], &mut second.cards[b.card]))
    }
}

/// Mutable references to two different elements of a slice
fn two_mut<T>(items: &mut [T], i: usize, j: usize) -> BankResult<(&mut T, &mut T)> {
    if i == j {
        return Err(BankError::Storage(format!(
            "Cannot borrow slot {} twice for one transfer",
            i
        )));
    }
    if i < j {
        let (left, right) = items.split_at_mut(j);
        Ok((&mut left[i], &mut right[0]))
    } else {
        let (left, right) = items.split_at_mut(i);
        Ok((&mut right[0], &mut left[j]))
    }
}
