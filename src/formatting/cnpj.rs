use crate::formatting::apply_mask;
use crate::str_utils::extract_digits;

const CNPJ_DIGIT_COUNT: usize = 14;
const CNPJ_MASK: &str = "##.###.###/####-##";

/// Formats 14 digits as `00.000.000/0000-00`.
///
/// Blank input gives an empty string. Unlike the CPF mask, any other input without
/// exactly 14 digits is returned unchanged.
pub fn add_mask(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    let digits = extract_digits(input);
    if digits.len() != CNPJ_DIGIT_COUNT {
        return input.to_owned();
    }
    apply_mask(&digits, CNPJ_MASK)
}

#[cfg(test)]
mod test {
    use super::add_mask;

    #[test]
    fn test_add_cnpj_mask() {
        let test_cases = vec![
            ("12345678000195", "12.345.678/0001-95"),
            ("98765432000100", "98.765.432/0001-00"),
            ("  11222333000181  ", "11.222.333/0001-81"),
            ("22.333.444/0001-99", "22.333.444/0001-99"),
            ("abc12345678000195xyz", "12.345.678/0001-95"),
            ("###98765432000100***", "98.765.432/0001-00"),
            ("00.000.000/0000-00", "00.000.000/0000-00"),
            ("\t66.777.888/0001-99\n", "66.777.888/0001-99"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(add_mask(input), expected, "input: {input}");
        }
    }

    #[test]
    fn blank_input_gives_empty_string() {
        for input in ["", " ", "   ", "\t\n"] {
            assert_eq!(add_mask(input), "", "input: {input:?}");
        }
    }

    #[test]
    fn wrong_digit_count_is_returned_as_is() {
        assert_eq!(add_mask(""), "");
        assert_eq!(add_mask("123"), "123");
        assert_eq!(add_mask("12.345.678/0001"), "12.345.678/0001");
    }
}
