use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref SLUG_FORBIDDEN: Regex = Regex::new(r"[^a-z0-9\s_-]").unwrap();
    static ref SLUG_SEPARATORS: Regex = Regex::new(r"[\s_-]+").unwrap();
}

/// Keep only the ASCII decimal digits of the input, in their original order.
///
/// Non-ASCII digit glyphs (e.g. Arabic-Indic or Devanagari digits, roman numerals)
/// are dropped like any other character.
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Keep only the alphabetic characters of the input, in their original order.
pub fn extract_letters(input: &str) -> String {
    input.chars().filter(|c| c.is_alphabetic()).collect()
}

/// True when the input is non-empty and made only of ASCII decimal digits
pub fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Strips accents and other combining marks ("São Paulo" -> "Sao Paulo"), and spells the
/// German sharp s as "ss". Every other character, whitespace included, is kept.
pub fn remove_diacritics(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.nfd() {
        match c {
            'ß' => output.push_str("ss"),
            'ẞ' => output.push_str("SS"),
            c if is_combining_mark(c) => {}
            c => output.push(c),
        }
    }
    output
}

/// URL-friendly form of a text: lowercase ASCII letters and digits, with words separated
/// by single hyphens. Whitespace, hyphens and underscores separate words, every other
/// character is dropped after accents are removed.
pub fn slugify(input: &str) -> String {
    let text = remove_diacritics(input).to_lowercase();
    let text = SLUG_FORBIDDEN.replace_all(&text, "");
    let text = SLUG_SEPARATORS.replace_all(&text, "-");
    text.trim_matches('-').to_owned()
}
