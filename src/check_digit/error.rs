use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CheckDigitConfigError {
    #[error("At least one multiplier is required")]
    EmptyMultipliers,

    #[error("The modulus must be greater than zero")]
    ZeroModulus,
}
