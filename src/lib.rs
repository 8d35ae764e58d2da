// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod age;
mod check_digit;
mod document;
mod email;
pub mod formatting;
mod generators;
mod observability;
mod stats;
mod str_utils;
mod text;

// This is the public API of the brdocs library
pub use age::{age_in_years, age_today};
pub use check_digit::{CheckDigit, CheckDigitConfig, CheckDigitConfigError, ModulusLimit};
pub use document::{
    is_cnpj, is_cpf, DocumentScheme, DocumentSchemeError, DocumentType, DocumentValidator,
    Validator, BRAZILIAN_CNPJ, BRAZILIAN_CPF,
};
pub use email::is_valid_email;
pub use generators::{
    random_alphanumeric, random_alphanumeric_with_rng, random_letters, random_letters_with_rng,
};
pub use observability::labels::Labels;
pub use str_utils::{extract_digits, extract_letters, is_digits, remove_diacritics, slugify};
pub use text::{
    capitalize_first_letter, clean_spaces, limit_length, normalize_spaces,
    remove_special_characters, replace_multiple, sanitize_html, to_title_case,
};
