//! The `actions_taken` filter dimension.

use std::str::FromStr;

use crate::Error;

/// Outcome a lender reports for a loan application. Closed set; the API
/// identifies each action by a fixed integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionTaken {
    /// Loan originated.
    Originated = 1,
    /// Application approved but not accepted.
    Approved = 2,
    /// Application denied.
    Denied = 3,
    /// Application withdrawn by applicant.
    Withdrawn = 4,
    /// File closed for incompleteness.
    Incomplete = 5,
    /// Loan purchased by the institution.
    Purchased = 6,
    /// Preapproval request denied.
    PreapprovalDenied = 7,
    /// Preapproval request approved but not accepted.
    PreapprovalApproved = 8,
}

impl ActionTaken {
    /// The integer code the API uses for this action on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Converts a slice of raw codes, reporting the position of the first
    /// code outside the closed set.
    pub fn from_codes(codes: &[u8]) -> Result<Vec<ActionTaken>, Error> {
        codes
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                ActionTaken::try_from(code).map_err(|_| Error::InvalidEnumValue {
                    kind: "action taken",
                    value: code.to_string(),
                    index: Some(i),
                })
            })
            .collect()
    }
}

impl std::fmt::Display for ActionTaken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u8> for ActionTaken {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ActionTaken::Originated),
            2 => Ok(ActionTaken::Approved),
            3 => Ok(ActionTaken::Denied),
            4 => Ok(ActionTaken::Withdrawn),
            5 => Ok(ActionTaken::Incomplete),
            6 => Ok(ActionTaken::Purchased),
            7 => Ok(ActionTaken::PreapprovalDenied),
            8 => Ok(ActionTaken::PreapprovalApproved),
            _ => Err(Error::InvalidEnumValue {
                kind: "action taken",
                value: code.to_string(),
                index: None,
            }),
        }
    }
}

impl FromStr for ActionTaken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "originated" => Ok(ActionTaken::Originated),
            "approved" => Ok(ActionTaken::Approved),
            "denied" => Ok(ActionTaken::Denied),
            "withdrawn" => Ok(ActionTaken::Withdrawn),
            "incomplete" => Ok(ActionTaken::Incomplete),
            "purchased" => Ok(ActionTaken::Purchased),
            "preapproval-denied" => Ok(ActionTaken::PreapprovalDenied),
            "preapproval-approved" => Ok(ActionTaken::PreapprovalApproved),
            _ => Err(Error::InvalidEnumValue {
                kind: "action taken",
                value: s.to_string(),
                index: None,
            }),
        }
    }
}
