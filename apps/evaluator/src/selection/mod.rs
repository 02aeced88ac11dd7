//! Selection state: what the user has picked so far, and whether it can be submitted.

pub mod state;
pub mod validation;

pub use state::SelectionState;
pub use validation::validate;
