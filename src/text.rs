use lazy_static::lazy_static;
use regex::{Captures, Regex};

const ELLIPSIS: &str = "...";

lazy_static! {
    static ref SCRIPT_OR_STYLE: Regex =
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>").unwrap();
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref ENTITY: Regex = Regex::new(r"&(lt|gt|amp|quot|apos|nbsp|#39);").unwrap();
}

/// Removes leading and trailing whitespace
pub fn clean_spaces(text: &str) -> String {
    text.trim().to_owned()
}

/// Trims the text and collapses every run of whitespace into a single space
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts the (trimmed) text to at most `max_chars` characters, followed by "..." if it was cut.
pub fn limit_length(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}{}", truncated.trim_end(), ELLIPSIS)
}

/// Uppercases the first letter of every word and lowercases the rest, e.g.
/// "tESTE de TEXTO" -> "Teste De Texto". Whitespace is kept as is.
pub fn to_title_case(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut title = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            title.push(c);
        } else if at_word_start {
            at_word_start = false;
            title.extend(c.to_uppercase());
        } else {
            title.extend(c.to_lowercase());
        }
    }
    title
}

/// Uppercases the first character and lowercases everything after it
pub fn capitalize_first_letter(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Keeps letters (accented ones included), digits and whitespace
pub fn remove_special_characters(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Applies every `(from, to)` replacement in order, each one over the output of the previous.
/// Empty patterns are ignored.
pub fn replace_multiple(text: &str, replacements: &[(&str, &str)]) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    replacements
        .iter()
        .filter(|(from, _)| !from.is_empty())
        .fold(text.to_owned(), |text, (from, to)| text.replace(*from, to))
}

/// Extracts the visible text of an HTML fragment.
///
/// Script and style blocks and comments are dropped with their content, other tags are
/// removed, the common entities are decoded (tags they spell are removed too) and
/// whitespace is normalized.
pub fn sanitize_html(html: &str) -> String {
    let text = SCRIPT_OR_STYLE.replace_all(html, "");
    let text = COMMENT.replace_all(&text, "");
    let text = TAG.replace_all(&text, "");
    let text = ENTITY.replace_all(&text, |caps: &Captures| {
        match &caps[1] {
            "lt" => "<",
            "gt" => ">",
            "amp" => "&",
            "quot" => "\"",
            "nbsp" => " ",
            _ => "'",
        }
        .to_owned()
    });
    let text = TAG.replace_all(&text, "");
    normalize_spaces(&text)
}
