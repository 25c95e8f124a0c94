//! Login identifier helpers for SMS-backed accounts

use crate::context::SMS_DOMAIN;
use crate::search::SearchMatcher;

/// Strip the SMS login suffix, leaving the bare phone number
pub fn remove_sms_domain(login: &str) -> &str {
    login.strip_suffix(SMS_DOMAIN).unwrap_or(login)
}

/// Canonical login for a raw identifier
///
/// Phone numbers become SMS-domain logins; numbers lacking a leading `+`
/// are first prefixed with the caller's country calling code. Anything that
/// is not a phone number passes through unchanged.
pub fn normalize_login(value: &str, country_code: u16, matcher: &SearchMatcher) -> String {
    if !matcher.is_valid_phone(value) || matcher.is_valid_email(value) {
        return value.to_string();
    }

    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if value.trim_start().starts_with('+') {
        format!("+{}{}", digits, SMS_DOMAIN)
    } else {
        format!("+{}{}{}", country_code, digits, SMS_DOMAIN)
    }
}
