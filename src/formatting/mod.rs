//! Masks for Brazilian documents and phone numbers.
//!
//! Formatting never validates: it only looks at the digits of the input and their count.
//! Use [crate::is_cpf] or [crate::is_cnpj] to check a number.

pub mod cnpj;
pub mod cpf;
pub mod phone;

use crate::str_utils::extract_digits;

/// Places the digits into `pattern`, where every `#` stands for one digit.
/// `digits` must hold exactly as many digits as the pattern has placeholders.
fn apply_mask(digits: &str, pattern: &str) -> String {
    let mut digits = digits.chars();
    pattern
        .chars()
        .filter_map(|c| if c == '#' { digits.next() } else { Some(c) })
        .collect()
}

/// Removes every non-digit character, e.g. "123.456.789-09" -> "12345678909"
pub fn remove_mask(input: &str) -> String {
    extract_digits(input)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_apply_mask() {
        assert_eq!(apply_mask("12345678909", "###.###.###-##"), "123.456.789-09");
        assert_eq!(apply_mask("", ""), "");
        assert_eq!(apply_mask("12", "(##)"), "(12)");
    }

    #[test]
    fn test_remove_mask() {
        assert_eq!(remove_mask("123.456.789-09"), "12345678909");
        assert_eq!(remove_mask("51.708.892/0001-10"), "51708892000110");
        assert_eq!(remove_mask(""), "");
    }
}
