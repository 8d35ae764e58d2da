use lazy_static::lazy_static;
use regex::Regex;

const MAX_EMAIL_LENGTH: usize = 253;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_DOMAIN_LABEL_LENGTH: usize = 63;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@([a-z0-9-]+\.)+[a-z]{2,}$").unwrap();
}

/// Syntactic check of an email address.
///
/// On top of the pattern, the length limits of RFC 5321 are enforced and the local part
/// can't start, end or contain consecutive dots. Domain labels can't be empty nor start
/// or end with an hyphen.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let Some((local_part, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local_part.len() > MAX_LOCAL_PART_LENGTH
        || local_part.contains("..")
        || local_part.starts_with('.')
        || local_part.ends_with('.')
    {
        return false;
    }

    let valid_labels = domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.len() <= MAX_DOMAIN_LABEL_LENGTH
    });

    valid_labels && EMAIL_PATTERN.is_match(email)
}
