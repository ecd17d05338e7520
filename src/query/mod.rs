mod input;
pub use self::input::OneOrMany;

mod translate;
pub use self::translate::{translate_actions, translate_races, translate_states, translate_years};

mod filter;
pub use self::filter::HmdaQuery;
