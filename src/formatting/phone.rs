use crate::formatting::apply_mask;
use crate::str_utils::extract_digits;

/// Formats a phone number according to its digit count:
/// - 8 digits: `0000-0000`
/// - 10 digits (area code + landline): `(00) 0000-0000`
/// - 11 digits (area code + mobile): `(00) 0 0000-0000`
///
/// Any other digit count gives an empty string.
pub fn add_mask(input: &str) -> String {
    let digits = extract_digits(input);
    let mask = match digits.len() {
        8 => "####-####",
        10 => "(##) ####-####",
        11 => "(##) # ####-####",
        _ => return String::new(),
    };
    apply_mask(&digits, mask)
}
