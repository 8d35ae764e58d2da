use crate::check_digit::error::CheckDigitConfigError;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use std::collections::BTreeMap;

pub const DEFAULT_MODULUS: u32 = 11;
pub const DEFAULT_FIRST_MULTIPLIER: u32 = 2;
pub const DEFAULT_LAST_MULTIPLIER: u32 = 9;

/// Forces the result to `substitute` when the remainder reaches `threshold`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModulusLimit {
    pub threshold: u32,
    #[serde(default)]
    pub substitute: u32,
}

/// The rules used to compute a single verification digit.
///
/// Built once (usually per document type) and then used to compute check digits
/// for any number of base numbers. Every setter returns a new value.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CheckDigitConfig {
    /// Applied cyclically, starting at the rightmost digit of the base number.
    pub multipliers: Vec<u32>,
    pub modulus: u32,
    /// When true the result is `modulus - remainder`, otherwise the raw remainder
    pub complement_of_modulus: bool,
    /// Replace every weighted product by the sum of its decimal digits
    pub digit_sum_folding: bool,
    pub modulus_limit: Option<ModulusLimit>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub substitutions: BTreeMap<u32, String>,
    pub reverse_base_number: bool,
}

impl Default for CheckDigitConfig {
    fn default() -> Self {
        Self {
            multipliers: (DEFAULT_FIRST_MULTIPLIER..=DEFAULT_LAST_MULTIPLIER).collect(),
            modulus: DEFAULT_MODULUS,
            complement_of_modulus: true,
            digit_sum_folding: false,
            modulus_limit: None,
            substitutions: BTreeMap::new(),
            reverse_base_number: false,
        }
    }
}

impl CheckDigitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use every multiplier from `first` to `last` (inclusive), ascending.
    pub fn multiplier_range(&self, first: u32, last: u32) -> Self {
        self.mutate_clone(|x| x.multipliers = (first..=last).collect())
    }

    pub fn multipliers(&self, multipliers: &[u32]) -> Self {
        self.mutate_clone(|x| x.multipliers = multipliers.to_vec())
    }

    pub fn reverse_multipliers(&self) -> Self {
        self.mutate_clone(|x| x.multipliers.reverse())
    }

    pub fn modulus(&self, modulus: u32) -> Self {
        self.mutate_clone(|x| x.modulus = modulus)
    }

    pub fn digit_sum_folding(&self) -> Self {
        self.mutate_clone(|x| x.digit_sum_folding = true)
    }

    pub fn without_modulus_complement(&self) -> Self {
        self.mutate_clone(|x| x.complement_of_modulus = false)
    }

    pub fn reverse_base_number(&self) -> Self {
        self.mutate_clone(|x| x.reverse_base_number = !x.reverse_base_number)
    }

    pub fn modulus_limit(&self, threshold: u32, substitute: u32) -> Self {
        self.mutate_clone(|x| {
            x.modulus_limit = Some(ModulusLimit {
                threshold,
                substitute,
            })
        })
    }

    /// Same as [CheckDigitConfig::modulus_limit] with a substitute of `0`
    pub fn modulus_limit_default(&self, threshold: u32) -> Self {
        self.modulus_limit(threshold, 0)
    }

    pub fn clear_modulus_limit(&self) -> Self {
        self.mutate_clone(|x| x.modulus_limit = None)
    }

    /// Emit `replacement` instead of the decimal value for each of the given results.
    pub fn substitute(&self, replacement: &str, for_results: &[u32]) -> Self {
        self.mutate_clone(|x| {
            for result in for_results {
                x.substitutions.insert(*result, replacement.to_owned());
            }
        })
    }

    pub fn validate(&self) -> Result<(), CheckDigitConfigError> {
        if self.multipliers.is_empty() {
            return Err(CheckDigitConfigError::EmptyMultipliers);
        }
        if self.modulus == 0 {
            return Err(CheckDigitConfigError::ZeroModulus);
        }
        Ok(())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
