use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Random ASCII letters (A-Z, a-z)
pub fn random_letters(limit: usize) -> String {
    random_letters_with_rng(&mut rand::thread_rng(), limit)
}

/// Random ASCII letters and digits (A-Z, a-z, 0-9)
pub fn random_alphanumeric(limit: usize) -> String {
    random_alphanumeric_with_rng(&mut rand::thread_rng(), limit)
}

pub fn random_letters_with_rng<R: Rng + ?Sized>(rng: &mut R, limit: usize) -> String {
    random_from(rng, LETTERS, limit)
}

pub fn random_alphanumeric_with_rng<R: Rng + ?Sized>(rng: &mut R, limit: usize) -> String {
    random_from(rng, ALPHANUMERIC, limit)
}

fn random_from<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], limit: usize) -> String {
    (0..limit)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn should_generate_requested_length() {
        for limit in [0, 1, 5, 10, 50] {
            assert_eq!(random_letters(limit).len(), limit);
            assert_eq!(random_alphanumeric(limit).len(), limit);
        }
    }

    #[test]
    fn should_only_use_the_alphabet() {
        assert!(random_letters(200).chars().all(|c| c.is_ascii_alphabetic()));
        assert!(random_alphanumeric(200)
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn same_seed_gives_same_string() {
        let first = random_alphanumeric_with_rng(&mut StdRng::seed_from_u64(42), 32);
        let second = random_alphanumeric_with_rng(&mut StdRng::seed_from_u64(42), 32);
        assert_eq!(first, second);
    }

    #[test]
    fn different_calls_give_different_strings() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = random_letters_with_rng(&mut rng, 32);
        let second = random_letters_with_rng(&mut rng, 32);
        assert_ne!(first, second);
    }
}
