mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    translate_actions, translate_races, translate_states, translate_years, HmdaQuery, OneOrMany,
};
