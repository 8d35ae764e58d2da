mod cnpj;
mod cpf;
pub mod metrics;
pub mod scheme;
mod validator;

pub use cnpj::BRAZILIAN_CNPJ;
pub use cpf::BRAZILIAN_CPF;
pub use scheme::{DocumentScheme, DocumentSchemeError};
pub use validator::DocumentValidator;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub trait Validator: Send + Sync {
    fn is_valid(&self, candidate: &str) -> bool;
}

/// The identifiers supported out of the box
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentType {
    /// Cadastro de Pessoas Físicas, 11 digits
    BrazilianCpf,
    /// Cadastro Nacional da Pessoa Jurídica, 14 digits
    BrazilianCnpj,
}

impl DocumentType {
    pub fn scheme(&self) -> &'static DocumentScheme {
        match self {
            DocumentType::BrazilianCpf => &BRAZILIAN_CPF,
            DocumentType::BrazilianCnpj => &BRAZILIAN_CNPJ,
        }
    }
}

impl Validator for DocumentType {
    fn is_valid(&self, candidate: &str) -> bool {
        self.scheme().is_valid(candidate)
    }
}

/// Validates a CPF, with or without its mask ("123.456.789-09" or "12345678909")
pub fn is_cpf(candidate: &str) -> bool {
    BRAZILIAN_CPF.is_valid(candidate)
}

/// Validates a CNPJ, with or without its mask ("51.708.892/0001-10" or "51708892000110")
pub fn is_cnpj(candidate: &str) -> bool {
    BRAZILIAN_CNPJ.is_valid(candidate)
}
