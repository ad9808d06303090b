//! Card model
//!
//! A card holds a balance and moves money according to its variant's tax
//! schedule. Every operation either succeeds completely or leaves both
//! balances untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::card_kind::{CardKind, Operation};
use super::card_number::CardNumber;
use crate::error::{BankError, BankResult};

/// Outcome of a single-card operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardReceipt {
    /// Amount requested by the caller
    pub amount: f64,
    /// Tax charged on top of (withdraw) or out of (deposit) the amount
    pub tax: f64,
    /// Card balance after the operation
    pub balance: f64,
}

/// Outcome of a card-to-card transfer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferReceipt {
    pub amount: f64,
    /// Charged to the sender on top of the amount
    pub send_tax: f64,
    /// Withheld from the amount the recipient receives
    pub deposit_tax: f64,
    pub sender_balance: f64,
    pub recipient_balance: f64,
}

/// A balance-holding card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub number: CardNumber,
    pub balance: f64,
    pub kind: CardKind,
}

impl Card {
    /// Issue a card of the given variant with its starting balance
    pub fn new(kind: CardKind, number: CardNumber) -> Self {
        Self {
            number,
            balance: kind.start_balance(),
            kind,
        }
    }

    /// Issue a card with a random number
    pub fn issue(kind: CardKind) -> Self {
        Self::new(kind, CardNumber::random())
    }

    pub fn withdraw_tax(&self, amount: f64) -> f64 {
        self.kind.compute_tax(Operation::Withdraw, amount)
    }

    pub fn put_tax(&self, amount: f64) -> f64 {
        self.kind.compute_tax(Operation::Deposit, amount)
    }

    pub fn send_tax(&self, amount: f64) -> f64 {
        self.kind.compute_tax(Operation::Send, amount)
    }

    /// Take `amount` plus withdraw tax off the card
    pub fn withdraw(&mut self, amount: f64) -> BankResult<CardReceipt> {
        let tax = self.charge(Operation::Withdraw, amount)?;
        self.ensure_covers(amount + tax)?;

        self.balance = self.settle(-(amount + tax))?;
        Ok(CardReceipt {
            amount,
            tax,
            balance: self.balance,
        })
    }

    /// Put `amount` minus deposit tax on the card
    pub fn deposit(&mut self, amount: f64) -> BankResult<CardReceipt> {
        let tax = self.charge(Operation::Deposit, amount)?;
        if amount < tax {
            return Err(BankError::AmountBelowTax { amount, tax });
        }

        self.balance = self.settle(amount - tax)?;
        Ok(CardReceipt {
            amount,
            tax,
            balance: self.balance,
        })
    }

    /// Move `amount` to `target`
    ///
    /// The target is credited before this card is debited, so a rejected
    /// deposit leaves both cards unchanged.
    pub fn send_to(&mut self, target: &mut Card, amount: f64) -> BankResult<TransferReceipt> {
        let send_tax = self.charge(Operation::Send, amount)?;
        self.ensure_covers(amount + send_tax)?;
        let sender_balance = self.settle(-(amount + send_tax))?;

        let received = target.deposit(amount)?;
        self.balance = sender_balance;

        Ok(TransferReceipt {
            amount,
            send_tax,
            deposit_tax: received.tax,
            sender_balance: self.balance,
            recipient_balance: received.balance,
        })
    }

    /// Tax for `operation`, refusing amounts and taxes that can't be stored
    fn charge(&self, operation: Operation, amount: f64) -> BankResult<f64> {
        ensure_amount(amount)?;
        let tax = self.kind.compute_tax(operation, amount);
        if !tax.is_finite() {
            return Err(BankError::Validation(format!(
                "Amount {} is too large to tax",
                amount
            )));
        }
        Ok(tax)
    }

    /// Balance after adding `delta`, which must stay finite
    fn settle(&self, delta: f64) -> BankResult<f64> {
        let balance = self.balance + delta;
        if !balance.is_finite() {
            return Err(BankError::Validation(format!(
                "Operation would take the balance of card {} out of range",
                self.number
            )));
        }
        Ok(balance)
    }

    fn ensure_covers(&self, needed: f64) -> BankResult<()> {
        if self.balance < needed {
            return Err(BankError::InsufficientFunds {
                card: self.number.to_string(),
                needed,
                available: self.balance,
            });
        }
        Ok(())
    }
}

/// Reject anything but a positive, finite amount
pub fn ensure_amount(amount: f64) -> BankResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BankError::Validation(format!(
            "Amount must be a positive number, got {}",
            amount
        )));
    }
    Ok(())
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn card(kind: CardKind, balance: f64) -> Card {
        let mut card = Card::issue(kind);
        card.balance = balance;
        card
    }

    #[test]
    fn test_new_card_uses_start_balance() {
        assert_close(Card::issue(CardKind::Premium).balance, 100.0);
        assert_close(Card::issue(CardKind::Standard).balance, 50.0);
        assert_close(Card::issue(CardKind::Virtual).balance, 150.0);
    }

    #[test]
    fn test_premium_withdraw() {
        let mut card = Card::issue(CardKind::Premium);
        let receipt = card.withdraw(50.0).unwrap();
        assert_close(receipt.tax, 2.0);
        assert_close(card.balance, 48.0);
        assert_close(receipt.balance, 48.0);
    }

    #[test]
    fn test_virtual_withdraw() {
        let mut card = Card::issue(CardKind::Virtual);
        card.withdraw(10.0).unwrap();
        assert_close(card.balance, 131.2);
    }

    #[test]
    fn test_withdraw_insufficient_funds_leaves_balance() {
        let mut card = card(CardKind::Standard, 10.0);
        let err = card.withdraw(100.0).unwrap_err();
        match err {
            BankError::InsufficientFunds {
                needed, available, ..
            } => {
                assert_close(needed, 105.0);
                assert_close(available, 10.0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_close(card.balance, 10.0);
    }

    #[test]
    fn test_withdraw_exact_balance_reaches_zero() {
        // 100 + 5% = 105
        let mut card = card(CardKind::Standard, 105.0);
        card.withdraw(100.0).unwrap();
        assert_close(card.balance, 0.0);
    }

    #[test]
    fn test_standard_deposit() {
        let mut card = Card::issue(CardKind::Standard);
        let receipt = card.deposit(10.0).unwrap();
        assert_close(receipt.tax, 0.2);
        assert_close(card.balance, 59.8);
    }

    #[test]
    fn test_deposit_below_tax_is_rejected() {
        let mut card = Card::issue(CardKind::Premium);
        let err = card.deposit(5.0).unwrap_err();
        assert!(matches!(err, BankError::AmountBelowTax { .. }));
        assert_close(card.balance, 100.0);
    }

    #[test]
    fn test_deposit_equal_to_tax_is_accepted() {
        let mut card = Card::issue(CardKind::Premium);
        card.deposit(10.0).unwrap();
        assert_close(card.balance, 100.0);
    }

    #[test]
    fn test_premium_to_premium_transfer() {
        let mut from = Card::issue(CardKind::Premium);
        let mut to = Card::issue(CardKind::Premium);

        let receipt = from.send_to(&mut to, 50.0).unwrap();

        assert_close(receipt.send_tax, 5.0);
        assert_close(receipt.deposit_tax, 10.0);
        assert_close(from.balance, 45.0);
        assert_close(to.balance, 140.0);
        assert_close(receipt.sender_balance, 45.0);
        assert_close(receipt.recipient_balance, 140.0);
    }

    #[test]
    fn test_transfer_conserves_money_minus_taxes() {
        let mut from = card(CardKind::Virtual, 300.0);
        let mut to = Card::issue(CardKind::Standard);
        let before = from.balance + to.balance;

        let receipt = from.send_to(&mut to, 120.0).unwrap();

        let after = from.balance + to.balance;
        assert_close(after, before - receipt.send_tax - receipt.deposit_tax);
    }

    #[test]
    fn test_transfer_insufficient_funds_touches_nothing() {
        let mut from = Card::issue(CardKind::Standard);
        let mut to = Card::issue(CardKind::Standard);

        // 40 + 20 fixed send tax > 50
        let err = from.send_to(&mut to, 40.0).unwrap_err();
        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_close(from.balance, 50.0);
        assert_close(to.balance, 50.0);
    }

    #[test]
    fn test_rejected_receipt_does_not_debit_sender() {
        let mut from = Card::issue(CardKind::Virtual);
        let mut to = Card::issue(CardKind::Premium);

        // Premium deposit tax is a fixed 10
        let err = from.send_to(&mut to, 5.0).unwrap_err();
        assert!(matches!(err, BankError::AmountBelowTax { .. }));
        assert_close(from.balance, 150.0);
        assert_close(to.balance, 100.0);
    }

    #[test]
    fn test_tax_previews_do_not_mutate() {
        let card = Card::issue(CardKind::Premium);
        assert_close(card.withdraw_tax(100.0), 4.0);
        assert_close(card.put_tax(100.0), 10.0);
        assert_close(card.send_tax(100.0), 10.0);
        assert_close(card.balance, 100.0);
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let mut premium = Card::issue(CardKind::Premium);
        let mut standard = Card::issue(CardKind::Standard);

        for amount in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(premium.deposit(amount).unwrap_err().is_validation());
            assert!(standard.deposit(amount).unwrap_err().is_validation());
            assert!(premium.withdraw(amount).unwrap_err().is_validation());
            assert!(premium.send_to(&mut standard, amount).unwrap_err().is_validation());
        }

        assert_close(premium.balance, 100.0);
        assert_close(standard.balance, 50.0);
    }

    #[test]
    fn test_deposit_overflowing_balance_is_rejected() {
        let mut full = card(CardKind::Premium, f64::MAX);

        let err = full.deposit(f64::MAX).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(full.balance, f64::MAX);
    }

    #[test]
    fn test_overflowing_receipt_does_not_debit_sender() {
        let mut sender = card(CardKind::Premium, f64::MAX);
        let mut target = card(CardKind::Virtual, f64::MAX);

        assert!(sender.send_to(&mut target, 1e307).is_err());
        assert_eq!(sender.balance, f64::MAX);
        assert_eq!(target.balance, f64::MAX);
    }

    #[test]
    fn test_serialization() {
        let card = Card::issue(CardKind::Virtual);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
