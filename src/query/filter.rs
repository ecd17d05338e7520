//! The filter set for one request and its query-string serialization.

use url::Url;

use crate::types::{ActionTaken, Race};
use crate::Error;

use super::input::OneOrMany;
use super::translate::{translate_actions, translate_races, translate_states, translate_years};

/// Filters for one Data Browser request: years and states are always
/// required, actions and races are optional (but the aggregations and loans
/// endpoints insist on at least one of the two).
#[derive(Clone, Debug)]
pub struct HmdaQuery {
    pub years: OneOrMany<u16>,
    pub states: OneOrMany<String>,
    pub actions: Option<OneOrMany<ActionTaken>>,
    pub races: Option<OneOrMany<Race>>,
}

impl HmdaQuery {
    /// Creates a query over the given year(s) and state(s).
    pub fn new(years: impl Into<OneOrMany<u16>>, states: impl Into<OneOrMany<String>>) -> Self {
        HmdaQuery {
            years: years.into(),
            states: states.into(),
            actions: None,
            races: None,
        }
    }

    /// Narrows the query to the given action(s) taken.
    pub fn with_actions(mut self, actions: impl Into<OneOrMany<ActionTaken>>) -> Self {
        self.actions = Some(actions.into());
        self
    }

    /// Narrows the query to the given race(s).
    pub fn with_races(mut self, races: impl Into<OneOrMany<Race>>) -> Self {
        self.races = Some(races.into());
        self
    }

    /// True when at least one of actions/races is present and non-empty.
    pub fn has_categorical_filter(&self) -> bool {
        let actions = self.actions.as_ref().is_some_and(|a| !a.is_empty());
        let races = self.races.as_ref().is_some_and(|r| !r.is_empty());
        actions || races
    }

    /// Runs the translators and assembles the parameter list with the
    /// literal API names. Absent or empty dimensions contribute no entry at
    /// all, never an empty string — an empty collection for years or states
    /// is treated the same as an absent optional filter. Pure: no I/O,
    /// translator failures propagate unchanged.
    pub fn to_params(&self) -> Result<Vec<(&'static str, String)>, Error> {
        let mut params = Vec::with_capacity(4);
        if !self.years.is_empty() {
            params.push(("years", translate_years(&self.years)));
        }
        if !self.states.is_empty() {
            params.push(("states", translate_states(&self.states)?));
        }
        if let Some(actions) = self.actions.as_ref().filter(|a| !a.is_empty()) {
            params.push(("actions_taken", translate_actions(actions)));
        }
        if let Some(races) = self.races.as_ref().filter(|r| !r.is_empty()) {
            params.push(("races", translate_races(races)));
        }
        Ok(params)
    }

    /// Appends this query's parameters to the given URL, returning the
    /// modified URL.
    pub fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let mut url = url.clone();
        for (name, value) in self.to_params()? {
            url.query_pairs_mut().append_pair(name, &value);
        }
        Ok(url)
    }
}
