//! Query tokenization and search-string matching
//!
//! A query matches an option when every token is found in the option's
//! denormalized search text, or (for non-room options) verbatim in the
//! participant-name set. Rooms are discoverable by name, not by member
//! identity.

mod identifiers;

pub use identifiers::{normalize_login, remove_sms_domain};

use ahash::AHashSet;
use regex::Regex;

use crate::error::{Result, RosterError};
use crate::model::PersonalDetail;

/// Literal non-breaking-space markup that leaks into stored display strings
const NBSP_MARKUP: &str = "&nbsp;";

/// Compiled matching and validation patterns
pub struct SearchMatcher {
    email: Regex,
    phone: Regex,
}

impl SearchMatcher {
    pub fn new() -> Result<Self> {
        // A non-empty local part rejects bare-domain addresses like @corp.com
        let email = compile("email", r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")?;
        let phone = compile("phone", r"^\+?[0-9]{5,15}$")?;
        Ok(Self { email, phone })
    }

    /// Token-wise match of `query` against an option
    ///
    /// Tokens must all match: case-insensitive substring of the search text
    /// (markup stripped), or membership in `participant_names` when the
    /// option is not room-like.
    pub fn is_match(
        &self,
        query: &str,
        search_text: &str,
        participant_names: &AHashSet<String>,
        is_room_like: bool,
    ) -> bool {
        let haystack = search_text.replace(NBSP_MARKUP, "").to_lowercase();
        tokenize_query(query).iter().all(|token| {
            haystack.contains(token.as_str())
                || (!is_room_like && participant_names.contains(token))
        })
    }

    /// Syntactically valid, non-domain email address
    pub fn is_valid_email(&self, value: &str) -> bool {
        self.email.is_match(value)
    }

    /// Phone number, optionally with a leading `+`; separators are ignored
    pub fn is_valid_phone(&self, value: &str) -> bool {
        let compact: String = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '(' | ')' | '-'))
            .collect();
        self.phone.is_match(&compact)
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| RosterError::Pattern {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Split a query into lowercased match tokens: dots removed, commas become
/// separators. Consecutive separators produce empty tokens, which are
/// dropped rather than treated as match-alls.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .replace('.', "")
        .replace(',', " ")
        .split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Lowercased login, first name, last name, and display name of every
/// participant; each non-empty field is included independently
pub fn participant_name_set(details: &[PersonalDetail]) -> AHashSet<String> {
    let mut names = AHashSet::new();
    for detail in details {
        for field in [
            &detail.login,
            &detail.first_name,
            &detail.last_name,
            &detail.display_name,
        ] {
            if !field.is_empty() {
                names.insert(field.to_lowercase());
            }
        }
    }
    names
}
