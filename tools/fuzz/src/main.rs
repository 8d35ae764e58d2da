use afl::fuzz;
use brdocs::{extract_digits, is_cnpj, is_cpf, CheckDigitConfig, BRAZILIAN_CNPJ, BRAZILIAN_CPF};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Digits: {:?}", extract_digits(input));
    }

    // The configurable engine must agree with the plain weighted sums
    assert_eq!(is_cpf(input), reference::is_cpf(input));
    assert_eq!(is_cnpj(input), reference::is_cnpj(input));

    // Computed check digits always produce a valid document, unless it is blocklisted
    let base = gen_digits(&mut rng, BRAZILIAN_CPF.base_length());
    let cpf = format!("{}{}", base, BRAZILIAN_CPF.compute_check_digits(&base));
    assert_eq!(is_cpf(&cpf), !is_uniform(&cpf));

    let base = gen_digits(&mut rng, BRAZILIAN_CNPJ.base_length());
    let cnpj = format!("{}{}", base, BRAZILIAN_CNPJ.compute_check_digits(&base));
    assert_eq!(is_cnpj(&cnpj), !is_uniform(&cnpj));

    // Any configuration must compute without panicking
    let config = gen_config(&mut rng);
    let digits = extract_digits(input);
    let check_digit = config.compute(&digits);
    #[cfg(feature = "manual_test")]
    {
        println!("Config: {:?}", config);
        println!("Check digit: {:?}", check_digit);
    }
    assert_eq!(check_digit, config.compute(&digits));
}

fn is_uniform(digits: &str) -> bool {
    digits.bytes().all(|b| Some(b) == digits.bytes().next())
}

fn gen_digits(rng: &mut StdRng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn gen_config(rng: &mut StdRng) -> CheckDigitConfig {
    let multipliers: Vec<u32> = (0..rng.gen_range(0..12))
        .map(|_| rng.gen_range(0..200))
        .collect();
    let mut config = CheckDigitConfig::new()
        .multipliers(&multipliers)
        .modulus(rng.gen_range(0..50));
    if rng.gen_bool(0.5) {
        config = config.digit_sum_folding();
    }
    if rng.gen_bool(0.5) {
        config = config.without_modulus_complement();
    }
    if rng.gen_bool(0.3) {
        config = config.reverse_base_number();
    }
    if rng.gen_bool(0.3) {
        config = config.modulus_limit(rng.gen_range(0..50), rng.gen_range(0..10));
    }
    if rng.gen_bool(0.3) {
        config = config.substitute("X", &[rng.gen_range(0..50)]);
    }
    config
}

/// Straightforward CPF/CNPJ arithmetic, independent from the check digit engine.
mod reference {
    use brdocs::extract_digits;

    const CPF_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
    const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    fn mod11_digit(digits: &[u32], weights: &[u32]) -> u32 {
        let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
        let remainder = sum % 11;
        if remainder < 2 {
            0
        } else {
            11 - remainder
        }
    }

    fn check(input: &str, length: usize, weights: &[u32]) -> bool {
        let digits: Vec<u32> = extract_digits(input)
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect();
        if digits.len() != length || digits.iter().all(|d| *d == digits[0]) {
            return false;
        }
        let base = length - 2;
        let v1 = mod11_digit(&digits[..base], &weights[1..]);
        let v2 = mod11_digit(&digits[..base + 1], weights);
        v1 == digits[base] && v2 == digits[base + 1]
    }

    pub fn is_cpf(input: &str) -> bool {
        check(input, 11, &CPF_WEIGHTS)
    }

    pub fn is_cnpj(input: &str) -> bool {
        !input.chars().any(char::is_alphabetic) && check(input, 14, &CNPJ_WEIGHTS)
    }
}
