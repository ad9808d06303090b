//! Credential handling and input resolution shared by CLI commands

use std::io::Write;

use crate::error::{BankError, BankResult};
use crate::models::{Account, CardNumber, CARD_NUMBER_LENGTH};
use crate::services::AccountService;
use crate::storage::SnapshotStore;

/// Login and password as given on the command line or in the environment
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    login: Option<String>,
    password: Option<String>,
}

impl Credentials {
    pub fn new(login: Option<String>, password: Option<String>) -> Self {
        Self { login, password }
    }

    /// The login, which every account command needs
    pub fn login(&self) -> BankResult<&str> {
        self.login
            .as_deref()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| {
                BankError::Validation("A login is required (use --login or CARDBANK_LOGIN)".into())
            })
    }

    /// The password, prompting for it without echo if it wasn't given
    pub fn password(&self) -> BankResult<String> {
        match &self.password {
            Some(password) => Ok(password.clone()),
            None => rpassword::prompt_password("Password: ")
                .map_err(|e| BankError::Io(format!("Failed to read password: {}", e))),
        }
    }

    /// Load the account these credentials belong to
    pub fn sign_in<S: SnapshotStore + ?Sized>(&self, store: &S) -> BankResult<Account> {
        let login = self.login()?;
        let password = self.password()?;
        AccountService::new(store).authenticate(login, &password)
    }
}

/// Resolve a card reference within `account`
///
/// A reference is either a full card number or the card's 1-based position
/// as shown by `card list`.
pub fn resolve_card(account: &Account, reference: &str) -> BankResult<CardNumber> {
    let reference = reference.trim();

    if reference.len() == CARD_NUMBER_LENGTH {
        let number = parse_card_number(reference)?;
        if !account.owns_card(&number) {
            return Err(BankError::card_not_found(reference));
        }
        return Ok(number);
    }

    let index: usize = reference.parse().map_err(|_| {
        BankError::Validation(format!(
            "'{}' is neither a card number nor a card position",
            reference
        ))
    })?;

    index
        .checked_sub(1)
        .and_then(|i| account.cards.get(i))
        .map(|card| card.number.clone())
        .ok_or_else(|| BankError::card_not_found(format!("#{}", index)))
}

/// Parse a full card number, e.g. a transfer recipient
pub fn parse_card_number(reference: &str) -> BankResult<CardNumber> {
    CardNumber::parse(reference).map_err(|e| BankError::Validation(e.to_string()))
}

/// Ask for confirmation unless `assume_yes` is set
pub fn confirm(prompt: &str, assume_yes: bool) -> BankResult<bool> {
    if assume_yes {
        return Ok(true);
    }

    print!("{} (y/n): ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
