//! Personal-detail snapshots keyed by login

use serde::{Deserialize, Serialize};

/// Profile record for a single login (email or phone-derived identifier)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetail {
    pub login: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Avatar asset reference, resolved by the icon layer
    pub avatar: Option<String>,

    pub phone_number: Option<String>,

    pub payment_address: Option<String>,
}

impl PersonalDetail {
    /// Placeholder for logins with no stored profile: the login stands in
    /// for the display name and the default avatar is used
    pub fn placeholder(login: &str) -> Self {
        Self {
            login: login.to_string(),
            display_name: login.to_string(),
            ..Default::default()
        }
    }

    /// Display name, falling back to the login when the profile has none
    pub fn display_name_or_login(&self) -> &str {
        if self.display_name.is_empty() {
            &self.login
        } else {
            &self.display_name
        }
    }
}
