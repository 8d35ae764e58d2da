use crate::check_digit::CheckDigitConfig;
use crate::document::scheme::DocumentScheme;
use lazy_static::lazy_static;

const CPF_LENGTH: usize = 11;
const CPF_BASE_LENGTH: u32 = 9;

lazy_static! {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    // Weights go from 10 (leftmost digit) down to 2, with one extra weight for the second
    // digit. A result of 10 or 11 (remainder lower than 2) becomes 0.
    pub static ref BRAZILIAN_CPF: DocumentScheme = {
        let check_digit = CheckDigitConfig::new().modulus(11).substitute("0", &[10, 11]);
        DocumentScheme::new(
            CPF_LENGTH,
            vec![
                check_digit.multiplier_range(2, CPF_BASE_LENGTH + 1),
                check_digit.multiplier_range(2, CPF_BASE_LENGTH + 2),
            ],
        )
    };
}
