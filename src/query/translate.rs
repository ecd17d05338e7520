//! Per-dimension translation of validated input into the comma-joined
//! strings the API expects.

use crate::types::{is_valid_state, ActionTaken, Race};
use crate::Error;

use super::input::OneOrMany;

/// Renders years as decimal strings, comma-joined in input order. The API
/// enforces year availability itself, so no range check happens here.
pub fn translate_years(years: &OneOrMany<u16>) -> String {
    match years {
        OneOrMany::Single(year) => year.to_string(),
        OneOrMany::Many(years) => years
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// Validates state tokens and joins them with commas, preserving input
/// order and original casing.
///
/// Each token is trimmed of surrounding whitespace and compared upper-cased
/// against the fixed abbreviation set; the first unrecognized token aborts
/// with [`Error::InvalidState`], naming the token and (for collections) its
/// position. A single token with an embedded comma ("DC,MD,VA") is rejected
/// the same way: pass a collection instead of a pre-joined string.
pub fn translate_states(states: &OneOrMany<String>) -> Result<String, Error> {
    match states {
        OneOrMany::Single(token) => check_abbreviation(token, None),
        OneOrMany::Many(tokens) => {
            let mut checked = Vec::with_capacity(tokens.len());
            for (i, token) in tokens.iter().enumerate() {
                checked.push(check_abbreviation(token, Some(i))?);
            }
            Ok(checked.join(","))
        }
    }
}

fn check_abbreviation(token: &str, index: Option<usize>) -> Result<String, Error> {
    let trimmed = token.trim();
    if is_valid_state(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(Error::InvalidState {
            token: trimmed.to_string(),
            index,
        })
    }
}

/// Renders actions as their wire codes, comma-joined in input order.
/// Duplicates are preserved. Membership in the closed set is guaranteed by
/// the type; loose input is rejected when it is parsed into [`ActionTaken`].
pub fn translate_actions(actions: &OneOrMany<ActionTaken>) -> String {
    match actions {
        OneOrMany::Single(action) => action.to_string(),
        OneOrMany::Many(actions) => actions
            .iter()
            .map(ActionTaken::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// Renders races as their display labels, comma-joined in input order —
/// the one dimension where the API takes label text rather than the
/// integer code. Duplicates are preserved.
pub fn translate_races(races: &OneOrMany<Race>) -> String {
    match races {
        OneOrMany::Single(race) => race.to_string(),
        OneOrMany::Many(races) => races
            .iter()
            .map(Race::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}
