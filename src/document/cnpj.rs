use crate::check_digit::CheckDigitConfig;
use crate::document::scheme::DocumentScheme;
use lazy_static::lazy_static;

const CNPJ_LENGTH: usize = 14;

lazy_static! {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    // Weights 2 to 9 are cycled from the rightmost digit, for both check digits.
    // Letters are refused rather than stripped.
    pub static ref BRAZILIAN_CNPJ: DocumentScheme = {
        let check_digit = CheckDigitConfig::new()
            .multiplier_range(2, 9)
            .modulus(11)
            .substitute("0", &[10, 11]);
        DocumentScheme::new(CNPJ_LENGTH, vec![check_digit.clone(), check_digit])
            .reject_letters(true)
    };
}
