//! The root state tree and its reducer.

use std::sync::Arc;

use crate::action::Action;
use crate::error::Result;
use crate::popular_tables;
use crate::popular_tables::PopularTablesState;
use crate::search;
use crate::search::SearchReducerState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub search: Arc<SearchReducerState>,
    pub popular_tables: Arc<PopularTablesState>,
}

impl AppState {
    /// Runs every slice reducer. Fails without producing a new state if any
    /// slice rejects the action.
    pub fn reduce(&self, action: &Action) -> Result<AppState> {
        let search = search::reduce(&self.search, action)?;
        let popular_tables = popular_tables::reduce(&self.popular_tables, action);
        Ok(AppState {
            search,
            popular_tables,
        })
    }

    /// True when `other` shares every slice with `self`.
    pub fn same_slices(&self, other: &AppState) -> bool {
        Arc::ptr_eq(&self.search, &other.search)
            && Arc::ptr_eq(&self.popular_tables, &other.popular_tables)
    }
}
