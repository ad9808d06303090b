//! Account service
//!
//! Account-level operations: creation, credential lookup, card management
//! and balance operations. Every mutation is persisted through the injected
//! snapshot store before the call returns.

use std::collections::HashSet;

use crate::error::{BankError, BankResult};
use crate::models::{
    ensure_amount, Account, Card, CardKind, CardNumber, CardReceipt, NewAccount,
    TransferReceipt,
};
use crate::storage::SnapshotStore;

use super::transfer::TransferService;

/// Attempts at drawing an unused card number before giving up
const MAX_NUMBER_ATTEMPTS: usize = 64;

/// Service for account management
pub struct AccountService<'a, S: SnapshotStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SnapshotStore + ?Sized> AccountService<'a, S> {
    /// Create a new account service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Persist a new account without cards
    ///
    /// Input is expected to have passed `AccountValidator` already; only
    /// the login collision is checked here so an existing user is never
    /// overwritten.
    pub fn create(&self, new: NewAccount) -> BankResult<Account> {
        if self.store.find(&new.login)?.is_some() {
            return Err(BankError::Duplicate {
                entity_type: "Account",
                identifier: new.login,
            });
        }

        let account = Account::from(new);
        self.store.upsert(&account)?;

        tracing::info!(login = %account.login, "account created");
        Ok(account)
    }

    /// Look up an account by login and password
    pub fn authenticate(&self, login: &str, password: &str) -> BankResult<Account> {
        self.store
            .load_all()?
            .into_iter()
            .find(|a| a.credentials_match(login, password))
            .ok_or_else(|| BankError::account_not_found(login))
    }

    /// Get an account by login
    pub fn find(&self, login: &str) -> BankResult<Option<Account>> {
        self.store.find(login)
    }

    /// Get all accounts
    pub fn list(&self) -> BankResult<Vec<Account>> {
        self.store.load_all()
    }

    /// Issue a new card of `kind` to the account
    pub fn add_card(&self, account: &mut Account, kind: CardKind) -> BankResult<Card> {
        let number = self.unused_card_number()?;
        let card = Card::new(kind, number);

        account.push_card(card.clone());
        self.store.upsert(account)?;

        tracing::info!(login = %account.login, card = %card.number, kind = %kind, "card added");
        Ok(card)
    }

    /// Remove a card from the account
    pub fn destroy_card(&self, account: &mut Account, number: &CardNumber) -> BankResult<Card> {
        let card = account
            .remove_card(number)
            .ok_or_else(|| BankError::card_not_found(number.to_string()))?;
        self.store.upsert(account)?;

        tracing::info!(login = %account.login, card = %number, "card destroyed");
        Ok(card)
    }

    /// Withdraw from one of the account's cards
    pub fn withdraw(
        &self,
        account: &mut Account,
        number: &CardNumber,
        amount: f64,
    ) -> BankResult<CardReceipt> {
        ensure_amount(amount)?;
        let card = account
            .card_mut(number)
            .ok_or_else(|| BankError::card_not_found(number.to_string()))?;

        let receipt = card.withdraw(amount).inspect_err(|e| {
            tracing::warn!(card = %number, amount, error = %e, "withdrawal rejected");
        })?;
        self.store.upsert(account)?;

        tracing::info!(card = %number, amount, tax = receipt.tax, "withdrawal completed");
        Ok(receipt)
    }

    /// Deposit onto one of the account's cards
    pub fn deposit(
        &self,
        account: &mut Account,
        number: &CardNumber,
        amount: f64,
    ) -> BankResult<CardReceipt> {
        ensure_amount(amount)?;
        let card = account
            .card_mut(number)
            .ok_or_else(|| BankError::card_not_found(number.to_string()))?;

        let receipt = card.deposit(amount).inspect_err(|e| {
            tracing::warn!(card = %number, amount, error = %e, "deposit rejected");
        })?;
        self.store.upsert(account)?;

        tracing::info!(card = %number, amount, tax = receipt.tax, "deposit completed");
        Ok(receipt)
    }

    /// Send money from one of the account's cards to any persisted card
    ///
    /// On success `account` is refreshed from the persisted snapshot.
    pub fn send_money(
        &self,
        account: &mut Account,
        from: &CardNumber,
        to: &CardNumber,
        amount: f64,
    ) -> BankResult<TransferReceipt> {
        let outcome = TransferService::new(self.store).send(&account.login, from, to, amount)?;
        *account = outcome.sender;
        Ok(outcome.receipt)
    }

    /// Delete the account and all of its cards
    pub fn destroy(&self, account: &Account) -> BankResult<()> {
        if !self.store.delete(&account.login)? {
            return Err(BankError::account_not_found(&account.login));
        }
        tracing::info!(login = %account.login, "account destroyed");
        Ok(())
    }

    fn unused_card_number(&self) -> BankResult<CardNumber> {
        let taken: HashSet<CardNumber> = self
            .store
            .load_all()?
            .into_iter()
            .flat_map(|a| a.cards.into_iter().map(|c| c.number))
            .collect();

        let mut rng = rand::thread_rng();
        for _ in 0..MAX_NUMBER_ATTEMPTS {
            let candidate = CardNumber::generate(&mut rng);
            if !taken.contains(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!(card = %candidate, "card number collision, retrying");
        }

        Err(BankError::Storage(
            "Could not allocate an unused card number".into(),
        ))
    }
}
