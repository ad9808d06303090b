//! Account model
//!
//! An account is a credentialed user owning an ordered list of cards. The
//! model itself never touches storage; persistence is handled by
//! `services::AccountService`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::Card;
use super::card_number::CardNumber;

/// Account creation input, as collected by the front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub login: String,
    pub password: String,
    pub name: String,
    pub age: u32,
}

/// A user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique login
    pub login: String,

    /// Stored as entered
    pub password: String,

    /// Display name
    pub name: String,

    pub age: u32,

    /// Owned cards, in the order they were added
    #[serde(default)]
    pub cards: Vec<Card>,

    /// When the account was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account without cards
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            name: name.into(),
            age,
            cards: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, number: &CardNumber) -> Option<&Card> {
        self.cards.iter().find(|c| &c.number == number)
    }

    pub fn card_mut(&mut self, number: &CardNumber) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.number == number)
    }

    /// Index of the card within this account
    pub fn card_position(&self, number: &CardNumber) -> Option<usize> {
        self.cards.iter().position(|c| &c.number == number)
    }

    pub fn owns_card(&self, number: &CardNumber) -> bool {
        self.card_position(number).is_some()
    }

    /// Append a card to the end of the list
    pub fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first card with the given number
    pub fn remove_card(&mut self, number: &CardNumber) -> Option<Card> {
        let index = self.card_position(number)?;
        Some(self.cards.remove(index))
    }

    pub fn credentials_match(&self, login: &str, password: &str) -> bool {
        self.login == login && self.password == password
    }

    /// Sum of all card balances
    pub fn total_balance(&self) -> f64 {
        self.cards.iter().map(|c| c.balance).sum()
    }
}

impl From<NewAccount> for Account {
    fn from(new: NewAccount) -> Self {
        Account::new(new.login, new.password, new.name, new.age)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardKind;

    fn sample() -> Account {
        Account::new("manfly", "manfly1", "Andrew", 23)
    }

    #[test]
    fn test_new_account() {
        let account = sample();
        assert_eq!(account.login, "manfly");
        assert_eq!(account.name, "Andrew");
        assert_eq!(account.age, 23);
        assert!(account.cards().is_empty());
    }

    #[test]
    fn test_card_management() {
        let mut account = sample();
        let first = Card::issue(CardKind::Standard);
        let second = Card::issue(CardKind::Virtual);
        let first_number = first.number.clone();
        let second_number = second.number.clone();

        account.push_card(first);
        account.push_card(second);

        assert!(account.owns_card(&first_number));
        assert_eq!(account.card_position(&second_number), Some(1));
        assert!((account.total_balance() - 200.0).abs() < 1e-9);

        let removed = account.remove_card(&first_number).unwrap();
        assert_eq!(removed.number, first_number);
        assert!(!account.owns_card(&first_number));
        assert_eq!(account.card_position(&second_number), Some(0));
        assert!(account.remove_card(&first_number).is_none());
    }

    #[test]
    fn test_card_mut() {
        let mut account = sample();
        let card = Card::issue(CardKind::Premium);
        let number = card.number.clone();
        account.push_card(card);

        account.card_mut(&number).unwrap().balance = 7.5;
        assert_eq!(account.card(&number).unwrap().balance, 7.5);
    }

    #[test]
    fn test_credentials_match() {
        let account = sample();
        assert!(account.credentials_match("manfly", "manfly1"));
        assert!(!account.credentials_match("manfly", "wrong"));
        assert!(!account.credentials_match("other", "manfly1"));
    }

    #[test]
    fn test_serialization() {
        let mut account = sample();
        account.push_card(Card::issue(CardKind::Premium));
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", sample()), "Andrew (manfly)");
    }
}
