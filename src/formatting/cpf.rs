use crate::formatting::apply_mask;
use crate::str_utils::extract_digits;

const CPF_DIGIT_COUNT: usize = 11;
const CPF_MASK: &str = "###.###.###-##";

/// Formats 11 digits as `000.000.000-00`. Returns an empty string for any other digit count.
pub fn add_mask(input: &str) -> String {
    let digits = extract_digits(input);
    if digits.len() != CPF_DIGIT_COUNT {
        return String::new();
    }
    apply_mask(&digits, CPF_MASK)
}
