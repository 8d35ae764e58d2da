//! Weighted check-digit computation.
//!
//! A check digit is computed from a base number by multiplying each digit (starting from
//! the rightmost one) by a cyclic sequence of multipliers, summing the products and reducing
//! the sum with a modulus. The variations used by most national identifier schemes
//! (complement of the modulus, digit folding, limits and symbol substitution) are all
//! expressed through [CheckDigitConfig].

pub mod config;
pub mod error;

pub use config::{CheckDigitConfig, ModulusLimit};
pub use error::CheckDigitConfigError;

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(number: u64) -> u64 {
    let mut sum = 0;
    let mut num = number;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

impl CheckDigitConfig {
    /// Computes the check digit of `base_number`.
    ///
    /// Returns an empty string when the base number is empty, or when the configuration
    /// can't produce a result (see [CheckDigitConfig::validate]). Non-digit characters of
    /// the base number are skipped.
    pub fn compute(&self, base_number: &str) -> String {
        if base_number.is_empty() || self.validate().is_err() {
            return String::new();
        }

        let digits = base_number.chars().filter_map(|c| c.to_digit(10));
        let total = if self.reverse_base_number {
            self.weighted_sum(digits)
        } else {
            self.weighted_sum(digits.rev())
        };

        let result = self.reduce(total);
        match self.substitutions.get(&result) {
            Some(substitution) => substitution.clone(),
            None => result.to_string(),
        }
    }

    /// `digits` must yield the least significant digit first
    fn weighted_sum(&self, digits: impl Iterator<Item = u32>) -> u64 {
        digits
            .zip(self.multipliers.iter().cycle())
            .map(|(digit, multiplier)| {
                let product = u64::from(digit) * u64::from(*multiplier);
                if self.digit_sum_folding {
                    sum_all_digits(product)
                } else {
                    product
                }
            })
            .sum()
    }

    fn reduce(&self, total: u64) -> u32 {
        // the remainder is always lower than the modulus, so it fits back in a u32
        let remainder = (total % u64::from(self.modulus)) as u32;
        match self.modulus_limit {
            Some(limit) if remainder >= limit.threshold => limit.substitute,
            _ if self.complement_of_modulus => self.modulus - remainder,
            _ => remainder,
        }
    }
}

/// A base number together with the rules used to compute its check digit.
///
/// ```
/// use brdocs::CheckDigit;
///
/// let digit = CheckDigit::new("43")
///     .multipliers(&[2, 1])
///     .without_modulus_complement()
///     .compute();
/// assert_eq!(digit, "10");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckDigit {
    base_number: String,
    config: CheckDigitConfig,
}

impl CheckDigit {
    pub fn new(base_number: &str) -> Self {
        Self::with_config(base_number, CheckDigitConfig::default())
    }

    pub fn with_config(base_number: &str, config: CheckDigitConfig) -> Self {
        Self {
            base_number: base_number.to_owned(),
            config,
        }
    }

    pub fn base_number(&self) -> &str {
        &self.base_number
    }

    pub fn config(&self) -> &CheckDigitConfig {
        &self.config
    }

    pub fn multiplier_range(&self, first: u32, last: u32) -> Self {
        self.map_config(|x| x.multiplier_range(first, last))
    }

    pub fn multipliers(&self, multipliers: &[u32]) -> Self {
        self.map_config(|x| x.multipliers(multipliers))
    }

    pub fn reverse_multipliers(&self) -> Self {
        self.map_config(CheckDigitConfig::reverse_multipliers)
    }

    pub fn modulus(&self, modulus: u32) -> Self {
        self.map_config(|x| x.modulus(modulus))
    }

    pub fn digit_sum_folding(&self) -> Self {
        self.map_config(CheckDigitConfig::digit_sum_folding)
    }

    pub fn without_modulus_complement(&self) -> Self {
        self.map_config(CheckDigitConfig::without_modulus_complement)
    }

    pub fn modulus_limit(&self, threshold: u32, substitute: u32) -> Self {
        self.map_config(|x| x.modulus_limit(threshold, substitute))
    }

    pub fn modulus_limit_default(&self, threshold: u32) -> Self {
        self.map_config(|x| x.modulus_limit_default(threshold))
    }

    pub fn clear_modulus_limit(&self) -> Self {
        self.map_config(CheckDigitConfig::clear_modulus_limit)
    }

    pub fn substitute(&self, replacement: &str, for_results: &[u32]) -> Self {
        self.map_config(|x| x.substitute(replacement, for_results))
    }

    /// Reverses the stored base number. Digits appended afterwards go to the end of the
    /// reversed number.
    pub fn reverse_base_number(&self) -> Self {
        Self {
            base_number: self.base_number.chars().rev().collect(),
            config: self.config.clone(),
        }
    }

    /// Appends a digit to the base number, typically a previously computed check digit.
    pub fn append_digit(&self, digit: &str) -> Self {
        Self {
            base_number: format!("{}{}", self.base_number, digit),
            config: self.config.clone(),
        }
    }

    pub fn compute(&self) -> String {
        self.config.compute(&self.base_number)
    }

    fn map_config(&self, modify: impl FnOnce(&CheckDigitConfig) -> CheckDigitConfig) -> Self {
        Self {
            base_number: self.base_number.clone(),
            config: modify(&self.config),
        }
    }
}
