use std::sync::OnceLock;

use regex::Regex;

/// Link token `^target^`.
pub struct Link;

impl Link {
    pub const DELIM: u8 = b'^';

    /// Scheme used when the token carries none.
    pub const DEFAULT_SCHEME: &'static str = "https://";

    /// Returns true if `target` starts with a URI scheme such as `mailto:`.
    pub fn has_scheme(target: &str) -> bool {
        static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = SCHEME_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z][a-zA-Z0-9+\-.]*:").expect("Invalid scheme regex")
        });
        re.is_match(target)
    }

    /// Resolves raw token content into `(url, label)`.
    pub fn resolve(content: &str) -> (String, String) {
        let label = content.trim();
        let url = if Self::has_scheme(label) {
            label.to_string()
        } else {
            format!("{}{label}", Self::DEFAULT_SCHEME)
        };
        (url, label.to_string())
    }
}
