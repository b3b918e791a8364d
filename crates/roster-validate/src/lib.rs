//! Turns raw roster rows into the canonical active-employee snapshot.

mod normalize;
mod validator;

pub use normalize::{ACTIVE_STATUS, normalize_row, parse_experience, parse_salary};
pub use validator::{READY_MESSAGE, ValidatedRoster, validate_roster};
