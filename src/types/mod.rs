mod state;
pub use self::state::{is_valid_state, STATE_ABBREVIATIONS};

mod action;
pub use self::action::ActionTaken;

mod race;
pub use self::race::Race;

mod table;
pub use self::table::DataTable;

mod response;
pub(crate) use self::response::{AggregationsResponse, InstitutionsResponse};
