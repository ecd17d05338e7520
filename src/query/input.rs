//! Single-value-or-collection input for the filter dimensions.

use crate::types::{ActionTaken, Race};

/// A single filter value or an ordered collection of them.
///
/// Every filter dimension accepts either form. Modeling the distinction
/// explicitly is what lets state validation reject a pre-joined string like
/// `"DC,MD,VA"` passed as one token: a collection is always `Many`, never an
/// embedded-comma `Single`.
#[derive(Clone, Debug)]
pub enum OneOrMany<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// True only for an empty `Many`; a `Single` always holds a value.
    pub fn is_empty(&self) -> bool {
        matches!(self, OneOrMany::Many(values) if values.is_empty())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<T: Clone> From<&[T]> for OneOrMany<T> {
    fn from(values: &[T]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

impl From<u16> for OneOrMany<u16> {
    fn from(year: u16) -> Self {
        OneOrMany::Single(year)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(state: &str) -> Self {
        OneOrMany::Single(state.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(state: String) -> Self {
        OneOrMany::Single(state)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(states: Vec<&str>) -> Self {
        OneOrMany::Many(states.into_iter().map(str::to_string).collect())
    }
}

impl From<ActionTaken> for OneOrMany<ActionTaken> {
    fn from(action: ActionTaken) -> Self {
        OneOrMany::Single(action)
    }
}

impl From<Race> for OneOrMany<Race> {
    fn from(race: Race) -> Self {
        OneOrMany::Single(race)
    }
}
