use std::sync::OnceLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Client-side form predicate, not a deliverability guarantee: requires a
/// local part, an `@`, a dotted domain, and a TLD of at least two letters.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Derives a short display abbreviation from a person's name: the uppercased
/// first characters of the first two whitespace-separated words. One word
/// yields one character; an empty or all-whitespace name yields "".
pub fn two_initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
