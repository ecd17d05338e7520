//! The `races` filter dimension.

use std::str::FromStr;

use crate::Error;

/// Race category of a loan applicant. Closed set; unlike actions, the API
/// expects the category's display label on the wire, not its integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Race {
    Asian = 0,
    PacificIslander = 1,
    FreeForm = 2,
    Unavailable = 3,
    NativeAmerican = 4,
    Black = 5,
    MixedMinority = 6,
    White = 7,
    Joint = 8,
}

impl Race {
    /// The integer code bound to this category.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The label the API expects in the `races` query parameter.
    pub fn label(self) -> &'static str {
        match self {
            Race::Asian => "Asian",
            Race::PacificIslander => "Native Hawaiian or Other Pacific Islander",
            Race::FreeForm => "Free Form Text Only",
            Race::Unavailable => "Race Not Available",
            Race::NativeAmerican => "American Indian or Alaska Native",
            Race::Black => "Black or African American",
            Race::MixedMinority => "2 or more minority races",
            Race::White => "White",
            Race::Joint => "Joint",
        }
    }

    /// Converts a slice of raw codes, reporting the position of the first
    /// code outside the closed set.
    pub fn from_codes(codes: &[u8]) -> Result<Vec<Race>, Error> {
        codes
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                Race::try_from(code).map_err(|_| Error::InvalidEnumValue {
                    kind: "race",
                    value: code.to_string(),
                    index: Some(i),
                })
            })
            .collect()
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u8> for Race {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Race::Asian),
            1 => Ok(Race::PacificIslander),
            2 => Ok(Race::FreeForm),
            3 => Ok(Race::Unavailable),
            4 => Ok(Race::NativeAmerican),
            5 => Ok(Race::Black),
            6 => Ok(Race::MixedMinority),
            7 => Ok(Race::White),
            8 => Ok(Race::Joint),
            _ => Err(Error::InvalidEnumValue {
                kind: "race",
                value: code.to_string(),
                index: None,
            }),
        }
    }
}

impl FromStr for Race {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asian" => Ok(Race::Asian),
            "pacific-islander" => Ok(Race::PacificIslander),
            "free-form" => Ok(Race::FreeForm),
            "unavailable" => Ok(Race::Unavailable),
            "native-american" => Ok(Race::NativeAmerican),
            "black" => Ok(Race::Black),
            "mixed-minority" => Ok(Race::MixedMinority),
            "white" => Ok(Race::White),
            "joint" => Ok(Race::Joint),
            _ => Err(Error::InvalidEnumValue {
                kind: "race",
                value: s.to_string(),
                index: None,
            }),
        }
    }
}
