//! Account creation rules
//!
//! Checks the details a user enters when opening an account. All failing
//! rules are reported together so the front-end can show them at once.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::BankResult;
use crate::models::NewAccount;
use crate::storage::SnapshotStore;

pub const AGE_RANGE: RangeInclusive<u32> = 23..=90;
pub const LOGIN_LENGTH: RangeInclusive<usize> = 4..=20;
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 6..=30;

/// A single broken creation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    InvalidName,
    InvalidAge(u32),
    EmptyLogin,
    ShortLogin,
    LongLogin,
    LoginTaken(String),
    EmptyPassword,
    ShortPassword,
    LongPassword,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => write!(f, "Name must not be empty and must start with a capital letter"),
            Self::InvalidAge(age) => write!(
                f,
                "Age must be between {} and {}, got {}",
                AGE_RANGE.start(),
                AGE_RANGE.end(),
                age
            ),
            Self::EmptyLogin => write!(f, "Login must be present"),
            Self::ShortLogin => write!(f, "Login must be at least {} characters", LOGIN_LENGTH.start()),
            Self::LongLogin => write!(f, "Login must be at most {} characters", LOGIN_LENGTH.end()),
            Self::LoginTaken(login) => write!(f, "Account with login '{}' already exists", login),
            Self::EmptyPassword => write!(f, "Password must be present"),
            Self::ShortPassword => write!(
                f,
                "Password must be at least {} characters",
                PASSWORD_LENGTH.start()
            ),
            Self::LongPassword => write!(
                f,
                "Password must be at most {} characters",
                PASSWORD_LENGTH.end()
            ),
        }
    }
}

/// Validates new accounts against the creation rules
pub struct AccountValidator<'a, S: SnapshotStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SnapshotStore + ?Sized> AccountValidator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Return every rule `new` breaks; empty means valid
    pub fn validate(&self, new: &NewAccount) -> BankResult<Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        if !name_is_valid(&new.name) {
            issues.push(ValidationIssue::InvalidName);
        }

        if !AGE_RANGE.contains(&new.age) {
            issues.push(ValidationIssue::InvalidAge(new.age));
        }

        let login_len = new.login.chars().count();
        if login_len == 0 {
            issues.push(ValidationIssue::EmptyLogin);
        }
        if login_len < *LOGIN_LENGTH.start() {
            issues.push(ValidationIssue::ShortLogin);
        }
        if login_len > *LOGIN_LENGTH.end() {
            issues.push(ValidationIssue::LongLogin);
        }
        if self.store.find(&new.login)?.is_some() {
            issues.push(ValidationIssue::LoginTaken(new.login.clone()));
        }

        let password_len = new.password.chars().count();
        if password_len == 0 {
            issues.push(ValidationIssue::EmptyPassword);
        }
        if password_len < *PASSWORD_LENGTH.start() {
            issues.push(ValidationIssue::ShortPassword);
        }
        if password_len > *PASSWORD_LENGTH.end() {
            issues.push(ValidationIssue::LongPassword);
        }

        Ok(issues)
    }
}

fn name_is_valid(name: &str) -> bool {
    match name.chars().next() {
        Some(first) => first.to_uppercase().eq(std::iter::once(first)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;
    use crate::storage::MemoryStore;

    fn valid() -> NewAccount {
        NewAccount {
            login: "manfly".into(),
            password: "manfly1".into(),
            name: "Andrew".into(),
            age: 23,
        }
    }

    #[test]
    fn test_valid_account_has_no_issues() {
        let store = MemoryStore::new();
        let issues = AccountValidator::new(&store).validate(&valid()).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_name_rules() {
        let store = MemoryStore::new();
        let validator = AccountValidator::new(&store);

        let lower = NewAccount {
            name: "andrew".into(),
            ..valid()
        };
        assert_eq!(
            validator.validate(&lower).unwrap(),
            vec![ValidationIssue::InvalidName]
        );

        let empty = NewAccount {
            name: String::new(),
            ..valid()
        };
        assert_eq!(
            validator.validate(&empty).unwrap(),
            vec![ValidationIssue::InvalidName]
        );
    }

    #[test]
    fn test_age_bounds() {
        let store = MemoryStore::new();
        let validator = AccountValidator::new(&store);

        for age in [23, 90] {
            let ok = NewAccount { age, ..valid() };
            assert!(validator.validate(&ok).unwrap().is_empty());
        }
        for age in [22, 91] {
            let bad = NewAccount { age, ..valid() };
            assert_eq!(
                validator.validate(&bad).unwrap(),
                vec![ValidationIssue::InvalidAge(age)]
            );
        }
    }

    #[test]
    fn test_empty_login_reports_both_rules() {
        let store = MemoryStore::new();
        let new = NewAccount {
            login: String::new(),
            ..valid()
        };
        let issues = AccountValidator::new(&store).validate(&new).unwrap();
        assert_eq!(
            issues,
            vec![ValidationIssue::EmptyLogin, ValidationIssue::ShortLogin]
        );
    }

    #[test]
    fn test_long_login_and_password() {
        let store = MemoryStore::new();
        let new = NewAccount {
            login: "l".repeat(21),
            password: "p".repeat(31),
            ..valid()
        };
        let issues = AccountValidator::new(&store).validate(&new).unwrap();
        assert_eq!(
            issues,
            vec![ValidationIssue::LongLogin, ValidationIssue::LongPassword]
        );
    }

    #[test]
    fn test_short_password() {
        let store = MemoryStore::new();
        let new = NewAccount {
            password: "abc".into(),
            ..valid()
        };
        let issues = AccountValidator::new(&store).validate(&new).unwrap();
        assert_eq!(issues, vec![ValidationIssue::ShortPassword]);
    }

    #[test]
    fn test_taken_login() {
        let store =
            MemoryStore::with_accounts(vec![Account::new("manfly", "other12", "Other", 40)]);
        let issues = AccountValidator::new(&store).validate(&valid()).unwrap();
        assert_eq!(issues, vec![ValidationIssue::LoginTaken("manfly".into())]);
    }

    #[test]
    fn test_every_issue_is_reported() {
        let store = MemoryStore::new();
        let new = NewAccount {
            login: "ab".into(),
            password: String::new(),
            name: "x".into(),
            age: 5,
        };
        let issues = AccountValidator::new(&store).validate(&new).unwrap();
        assert_eq!(issues.len(), 5);
    }

    #[test]
    fn test_issue_display() {
        assert_eq!(
            ValidationIssue::InvalidAge(5).to_string(),
            "Age must be between 23 and 90, got 5"
        );
    }
}
