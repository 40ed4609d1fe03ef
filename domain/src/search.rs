use std::sync::OnceLock;

use regex::Regex;

/// Hyphens, slashes and commas separate words in addresses ("Nork-Marash", "Kentron, Yerevan").
fn replace_separators(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[-/,.]").unwrap());
    re.replace_all(s, " ").to_string()
}

/// Removes everything except letters and numbers from all scripts and plain spaces.
fn remove_non_alphanumeric(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N} ]+").unwrap());
    re.replace_all(s, "").to_string()
}

fn normalize_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").unwrap());
    re.replace_all(s, " ").to_string()
}

pub fn normalize_for_search(s: &str) -> String {
    let s = s.to_lowercase();
    let s = replace_separators(&s);
    let s = remove_non_alphanumeric(&s);
    let s = normalize_whitespace(&s);
    s.trim().to_string()
}

/// True when the normalized query occurs in any of the normalized fields.
/// An empty query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = normalize_for_search(query);
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| normalize_for_search(field).contains(&query))
}
