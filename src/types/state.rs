//! The fixed set of state and territory abbreviations the API accepts.

/// Two-letter abbreviations for the 50 US states, DC, and the territories
/// the HMDA dataset covers. Comparison is always done on the upper-cased
/// token; see [`is_valid_state`].
pub const STATE_ABBREVIATIONS: [&str; 60] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY", "AS", "GU", "MP", "PR", "VI", "UM", "FM", "MH", "PW",
];

/// Returns true when `token` (upper-cased) is a recognized state or
/// territory abbreviation. The caller is expected to have trimmed
/// surrounding whitespace already.
pub fn is_valid_state(token: &str) -> bool {
    let upper = token.to_ascii_uppercase();
    STATE_ABBREVIATIONS.contains(&upper.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        assert!(is_valid_state("DC"));
        assert!(is_valid_state("dc"));
        assert!(is_valid_state("Md"));
        assert!(is_valid_state("pr"));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!(!is_valid_state("XY"));
        assert!(!is_valid_state("Virginia"));
        assert!(!is_valid_state(""));
        // pre-joined lists are not a single abbreviation
        assert!(!is_valid_state("DC,MD,VA"));
    }
}
