//! Syntactic answer checks for the intake questions.
//!
//! All rules are South African: mobile numbers in `27` international form,
//! Gmail addresses, and a province/city allow-list for service addresses.
//! None of these perform lookups; they only inspect the text.

use std::sync::OnceLock;

use regex::Regex;

pub const PHONE_COUNTRY_CODE: &str = "27";
pub const PHONE_TRUNK_PREFIX: char = '0';
pub const PHONE_TOTAL_DIGITS: usize = 11;
pub const EMAIL_DOMAIN: &str = "gmail.com";

pub const SERVICE_REGIONS: [&str; 9] = [
    "Gauteng",
    "Western Cape",
    "Eastern Cape",
    "Northern Cape",
    "Free State",
    "KwaZulu-Natal",
    "Limpopo",
    "Mpumalanga",
    "North West",
];

pub const SERVICE_CITIES: [&str; 22] = [
    "Johannesburg",
    "Pretoria",
    "Cape Town",
    "Durban",
    "Port Elizabeth",
    "Gqeberha",
    "Bloemfontein",
    "East London",
    "Pietermaritzburg",
    "Polokwane",
    "Mbombela",
    "Nelspruit",
    "Kimberley",
    "Rustenburg",
    "Soweto",
    "Sandton",
    "Centurion",
    "Midrand",
    "Stellenbosch",
    "Paarl",
    "Umhlanga",
    "Benoni",
];

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@(?i:gmail\.com)$")
            .expect("email pattern is a valid regex literal")
    })
}

/// Strips separators and rewrites the number into bare international form.
///
/// `+27 82 ...` becomes `2782...`, a domestic `082 ...` becomes `2782...`.
/// Anything else is returned compacted but otherwise untouched.
pub fn normalize_phone(raw: &str) -> String {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '-' | '(' | ')' | '.'))
        .collect();

    if let Some(international) = compact.strip_prefix('+') {
        return international.to_string();
    }
    if let Some(domestic) = compact.strip_prefix(PHONE_TRUNK_PREFIX) {
        return format!("{PHONE_COUNTRY_CODE}{domestic}");
    }
    compact
}

pub fn validate_phone(raw: &str) -> bool {
    let normalized = normalize_phone(raw);
    normalized.len() == PHONE_TOTAL_DIGITS
        && normalized.starts_with(PHONE_COUNTRY_CODE)
        && normalized.chars().all(|ch| ch.is_ascii_digit())
}

pub fn validate_email_domain(raw: &str) -> bool {
    email_pattern().is_match(raw.trim())
}

/// Accepts any text mentioning a known province or city.
///
/// This is an allow-list heuristic: "Gauteng, but actually New York" passes,
/// a misspelled suburb without a city does not.
pub fn validate_region(raw: &str) -> bool {
    let haystack = raw.to_lowercase();
    SERVICE_REGIONS
        .iter()
        .chain(SERVICE_CITIES.iter())
        .any(|place| haystack.contains(&place.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::{
        email_pattern, normalize_phone, validate_email_domain, validate_phone, validate_region,
    };

    #[test]
    fn phone_accepts_international_domestic_and_formatted_numbers() {
        for accepted in
            ["+27821234567", "27821234567", "0821234567", "082 123 4567", "(082) 123-4567"]
        {
            assert!(validate_phone(accepted), "{accepted} should be accepted");
        }
    }

    #[test]
    fn phone_rejects_short_and_foreign_numbers() {
        for rejected in ["12345", "+1 555 1234", "", "08212345678", "082 123 456a"] {
            assert!(!validate_phone(rejected), "{rejected} should be rejected");
        }
    }

    #[test]
    fn phone_normalization_maps_trunk_and_plus_prefixes() {
        assert_eq!(normalize_phone("+27 82 123 4567"), "27821234567");
        assert_eq!(normalize_phone("082.123.4567"), "27821234567");
        assert_eq!(normalize_phone("27821234567"), "27821234567");
    }

    #[test]
    fn email_pattern_compiles_and_is_cached() {
        let first = email_pattern();
        let second = email_pattern();

        assert!(std::ptr::eq(first, second));
        assert!(first.is_match("jane@gmail.com"));
    }

    #[test]
    fn email_accepts_gmail_local_parts() {
        assert!(validate_email_domain("user.name+tag@gmail.com"));
        assert!(validate_email_domain("jane_doe-99%x@GMAIL.com"));
    }

    #[test]
    fn email_rejects_other_domains_and_malformed_input() {
        for rejected in
            ["user@yahoo.com", "not-an-email", "@gmail.com", "user@gmail.com.evil", "a b@gmail.com"]
        {
            assert!(!validate_email_domain(rejected), "{rejected} should be rejected");
        }
    }

    #[test]
    fn region_matches_provinces_and_cities_case_insensitively() {
        assert!(validate_region("14 Main Road, Sandton, GAUTENG"));
        assert!(validate_region("5 Long street, cape town"));
        assert!(validate_region("Cape Town, Western Cape"));
        assert!(!validate_region("New York, USA"));
        assert!(!validate_region(""));
    }
}
