use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub validator_creations: Counter,

    // Custom schemes refused by `DocumentValidator::new`
    pub invalid_schemes: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            validator_creations: counter!("validator.creations"),
            invalid_schemes: counter!("validator.invalid_schemes"),
        }
    }
}
