pub mod actions;
pub mod filters;
pub mod reducer;
pub mod state;

pub use reducer::reduce;
pub use state::InlineResultsState;
pub use state::SearchReducerState;
