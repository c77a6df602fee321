//! Popular tables shown on the landing page.

use std::sync::Arc;

use catalog_protocol::TableResource;

use crate::action::Action;
use crate::action::GetPopularTables;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopularTablesState {
    pub popular_tables: Vec<TableResource>,
    /// Set once a fetch finished, successfully or not.
    pub is_loaded: bool,
}

pub fn get_popular_tables() -> Action {
    Action::GetPopularTables(GetPopularTables::Request)
}

pub fn get_popular_tables_success(tables: Vec<TableResource>) -> Action {
    Action::GetPopularTables(GetPopularTables::Success(tables))
}

pub fn get_popular_tables_failure() -> Action {
    Action::GetPopularTables(GetPopularTables::Failure)
}

pub fn reduce(state: &Arc<PopularTablesState>, action: &Action) -> Arc<PopularTablesState> {
    match action {
        Action::GetPopularTables(GetPopularTables::Request) => Arc::new(PopularTablesState {
            popular_tables: state.popular_tables.clone(),
            is_loaded: false,
        }),
        Action::GetPopularTables(GetPopularTables::Success(tables)) => {
            Arc::new(PopularTablesState {
                popular_tables: tables.clone(),
                is_loaded: true,
            })
        }
        Action::GetPopularTables(GetPopularTables::Failure) => Arc::new(PopularTablesState {
            popular_tables: Vec::new(),
            is_loaded: true,
        }),
        _ => Arc::clone(state),
    }
}
