//! Filter sub-state of the search slice.
//!
//! The search reducer never edits filters itself; it hands the current
//! filter state and the whole action to [`reduce`] and stores the result.

use catalog_protocol::FilterReducerState;
use catalog_protocol::FilterValue;
use catalog_protocol::ResourceFilters;
use catalog_protocol::ResourceType;

use crate::action::Action;

pub fn initial_filter_state() -> FilterReducerState {
    FilterReducerState::new()
}

pub fn reduce(state: &FilterReducerState, action: &Action) -> FilterReducerState {
    match action {
        Action::SubmitSearchResource(request) => match &request.resource_filters {
            Some(resource_filters) => {
                let mut next = state.clone();
                if resource_filters.is_empty() {
                    next.remove(&request.resource);
                } else {
                    next.insert(request.resource, resource_filters.clone());
                }
                next
            }
            None => state.clone(),
        },
        _ => state.clone(),
    }
}

/// Filters of `resource` after setting (`Some`) or clearing (`None`) a
/// single category.
pub fn with_category(
    filters: &FilterReducerState,
    resource: ResourceType,
    category_id: &str,
    value: Option<FilterValue>,
) -> ResourceFilters {
    let mut next = filters.get(&resource).cloned().unwrap_or_default();
    match value {
        Some(value) if !value.value.is_empty() => {
            next.insert(category_id.to_string(), value);
        }
        _ => {
            next.remove(category_id);
        }
    }
    next
}
