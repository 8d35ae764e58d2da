use crate::check_digit::{CheckDigitConfig, CheckDigitConfigError};
use crate::document::Validator;
use crate::str_utils::extract_digits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fixed-length numeric identifier ending with one or more check digits.
///
/// Each entry of `check_digits` computes one verification digit. The first one is computed
/// over the base number (the leading `length - check_digits.len()` digits), every following
/// one over the base number extended with the digits computed so far.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DocumentScheme {
    pub length: usize,
    pub check_digits: Vec<CheckDigitConfig>,
    /// Reject numbers made of a single repeated digit ("00000000000", "11111111111", ...)
    #[serde(default = "default_reject_uniform_digits")]
    pub reject_uniform_digits: bool,
    /// Reject candidates containing any letter instead of stripping it with the mask
    #[serde(default)]
    pub reject_letters: bool,
}

fn default_reject_uniform_digits() -> bool {
    true
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DocumentSchemeError {
    #[error("A document scheme needs at least one check digit")]
    NoCheckDigits,

    #[error("A document of {length} digits can't hold {check_digit_count} check digits")]
    LengthTooShort {
        length: usize,
        check_digit_count: usize,
    },

    #[error("Invalid configuration for check digit {index}: {source}")]
    InvalidCheckDigit {
        index: usize,
        #[source]
        source: CheckDigitConfigError,
    },
}

/// The gate that refused a candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rejection {
    Shape,
    Blocklist,
    Checksum,
}

impl DocumentScheme {
    pub fn new(length: usize, check_digits: Vec<CheckDigitConfig>) -> Self {
        Self {
            length,
            check_digits,
            reject_uniform_digits: true,
            reject_letters: false,
        }
    }

    pub fn reject_uniform_digits(&self, reject_uniform_digits: bool) -> Self {
        self.mutate_clone(|x| x.reject_uniform_digits = reject_uniform_digits)
    }

    pub fn reject_letters(&self, reject_letters: bool) -> Self {
        self.mutate_clone(|x| x.reject_letters = reject_letters)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }

    pub fn validate(&self) -> Result<(), DocumentSchemeError> {
        if self.check_digits.is_empty() {
            return Err(DocumentSchemeError::NoCheckDigits);
        }
        if self.check_digits.len() >= self.length {
            return Err(DocumentSchemeError::LengthTooShort {
                length: self.length,
                check_digit_count: self.check_digits.len(),
            });
        }
        for (index, config) in self.check_digits.iter().enumerate() {
            config
                .validate()
                .map_err(|source| DocumentSchemeError::InvalidCheckDigit { index, source })?;
        }
        Ok(())
    }

    /// Number of leading digits that are not check digits
    pub fn base_length(&self) -> usize {
        self.length.saturating_sub(self.check_digits.len())
    }

    /// Computes every check digit of `base_number`, concatenated.
    ///
    /// Returns an empty string if `base_number` is empty or if a check digit can't be computed.
    pub fn compute_check_digits(&self, base_number: &str) -> String {
        let mut number = base_number.to_owned();
        let mut computed = String::new();
        for config in &self.check_digits {
            let digit = config.compute(&number);
            if digit.is_empty() {
                return String::new();
            }
            number.push_str(&digit);
            computed.push_str(&digit);
        }
        computed
    }

    pub(crate) fn evaluate(&self, candidate: &str) -> Result<(), Rejection> {
        if self.reject_letters && candidate.chars().any(char::is_alphabetic) {
            return Err(Rejection::Shape);
        }

        let digits = extract_digits(candidate);

        if digits.len() != self.length
            || self.check_digits.is_empty()
            || self.check_digits.len() >= self.length
        {
            return Err(Rejection::Shape);
        }

        if self.reject_uniform_digits && is_uniform(&digits) {
            return Err(Rejection::Blocklist);
        }

        let (base_number, expected) = digits.split_at(self.base_length());
        if self.compute_check_digits(base_number) != expected {
            return Err(Rejection::Checksum);
        }
        Ok(())
    }
}

impl Validator for DocumentScheme {
    fn is_valid(&self, candidate: &str) -> bool {
        self.evaluate(candidate).is_ok()
    }
}

/// True if every digit is the same (e.g. "77777777777")
fn is_uniform(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}
