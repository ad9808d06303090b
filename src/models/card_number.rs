//! 16-digit card numbers

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a card number
pub const CARD_NUMBER_LENGTH: usize = 16;

/// A card number: exactly sixteen ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardNumber(String);

impl CardNumber {
    /// Generate a random number using the given source
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let digits = (0..CARD_NUMBER_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self(digits)
    }

    /// Generate a random number from the thread-local generator
    pub fn random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    /// Parse a card number, rejecting anything that isn't 16 digits
    pub fn parse(s: &str) -> Result<Self, CardNumberError> {
        let s = s.trim();
        if s.len() != CARD_NUMBER_LENGTH {
            return Err(CardNumberError::WrongLength(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CardNumberError::NonDigit(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for CardNumber {
    type Err = CardNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CardNumber {
    type Error = CardNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CardNumber> for String {
    fn from(number: CardNumber) -> Self {
        number.0
    }
}

/// Reasons a string is not a card number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardNumberError {
    WrongLength(usize),
    NonDigit(String),
}

impl fmt::Display for CardNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "Card number must have {} digits, got {}",
                CARD_NUMBER_LENGTH, len
            ),
            Self::NonDigit(s) => write!(f, "Card number must contain only digits: {}", s),
        }
    }
}

impl std::error::Error for CardNumberError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_number_is_sixteen_digits() {
        let number = CardNumber::random();
        assert_eq!(number.as_str().len(), CARD_NUMBER_LENGTH);
        assert!(number.as_str().bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = CardNumber::generate(&mut StdRng::seed_from_u64(7));
        let b = CardNumber::generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse() {
        assert!(CardNumber::parse("1234567890123456").is_ok());
        assert_eq!(
            CardNumber::parse("12345"),
            Err(CardNumberError::WrongLength(5))
        );
        assert!(matches!(
            CardNumber::parse("12345678901234ab"),
            Err(CardNumberError::NonDigit(_))
        ));
    }

    #[test]
    fn test_deserialize_rejects_invalid_number() {
        let ok: CardNumber = serde_json::from_str("\"0000111122223333\"").unwrap();
        assert_eq!(ok.as_str(), "0000111122223333");
        assert!(serde_json::from_str::<CardNumber>("\"42\"").is_err());
    }
}
