use once_cell::sync::Lazy;
use regex::Regex;

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("static regex is valid"));

pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}
