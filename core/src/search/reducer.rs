use std::sync::Arc;

use crate::action::Action;
use crate::action::InlineSearch;
use crate::action::SearchAll;
use crate::action::SearchResource;
use crate::action::UpdateSearchState;
use crate::error::Result;
use crate::error::StateError;
use crate::search::filters;
use crate::search::state::InlineResultsState;
use crate::search::state::SearchReducerState;

/// Applies `action` to the search slice.
///
/// Actions this slice does not react to return the very same `Arc`, so
/// observers can detect "nothing changed" with [`Arc::ptr_eq`]. A success
/// action without its payload is rejected and `state` is left as it was.
pub fn reduce(
    state: &Arc<SearchReducerState>,
    action: &Action,
) -> Result<Arc<SearchReducerState>> {
    let next = match action {
        Action::SubmitSearch(request) => SearchReducerState {
            is_loading: true,
            search_term: request.search_term.clone(),
            ..SearchReducerState::clone(state)
        },
        Action::SubmitSearchResource(request) => {
            let search_term = request
                .search_term
                .as_ref()
                .filter(|term| !term.is_empty())
                .unwrap_or(&state.search_term)
                .clone();
            SearchReducerState {
                is_loading: true,
                filters: filters::reduce(&state.filters, action),
                search_term,
                ..SearchReducerState::clone(state)
            }
        }
        Action::UpdateSearchState(UpdateSearchState::Request(request)) => {
            let resource = request.resource.unwrap_or(state.resource);
            let mut next = SearchReducerState {
                filters: request
                    .filters
                    .clone()
                    .unwrap_or_else(|| state.filters.clone()),
                resource,
                did_search: false,
                ..SearchReducerState::clone(state)
            };
            if request.clear_resource_results {
                next.clear_bucket(resource);
            }
            next
        }
        Action::UpdateSearchState(UpdateSearchState::Reset) => SearchReducerState::default(),
        Action::SearchAll(SearchAll::Request(request)) => SearchReducerState {
            inline_results: InlineResultsState::default(),
            search_term: request.term.clone(),
            is_loading: true,
            ..SearchReducerState::clone(state)
        },
        Action::SearchResource(SearchResource::Request(_)) => SearchReducerState {
            is_loading: true,
            ..SearchReducerState::clone(state)
        },
        // Start from scratch so buckets of an earlier, differently scoped
        // search cannot survive into this one.
        Action::SearchAll(SearchAll::Success(payload)) => {
            let Some(payload) = payload else {
                return Err(StateError::missing_payload(action.kind()));
            };
            SearchReducerState {
                search_term: payload.search_term.clone(),
                resource: payload.resource,
                tables: payload.tables.clone(),
                users: payload.users.clone(),
                dashboards: payload.dashboards.clone(),
                features: payload.features.clone(),
                filters: state.filters.clone(),
                did_search: true,
                inline_results: InlineResultsState {
                    is_loading: false,
                    tables: payload.tables.clone(),
                    users: payload.users.clone(),
                    dashboards: payload.dashboards.clone(),
                    features: payload.features.clone(),
                },
                ..SearchReducerState::default()
            }
        }
        // Only the buckets present in the payload change; sibling resources
        // keep whatever the user is looking at.
        Action::SearchResource(SearchResource::Success(payload)) => {
            let mut next = SearchReducerState::clone(state);
            if let Some(payload) = payload {
                if let Some(search_term) = &payload.search_term {
                    next.search_term = search_term.clone();
                }
                if let Some(tables) = &payload.tables {
                    next.tables = tables.clone();
                }
                if let Some(users) = &payload.users {
                    next.users = users.clone();
                }
                if let Some(dashboards) = &payload.dashboards {
                    next.dashboards = dashboards.clone();
                }
                if let Some(features) = &payload.features {
                    next.features = features.clone();
                }
            }
            next.is_loading = false;
            next.did_search = true;
            next
        }
        Action::SearchAll(SearchAll::Failure) | Action::SearchResource(SearchResource::Failure) => {
            SearchReducerState {
                search_term: state.search_term.clone(),
                ..SearchReducerState::default()
            }
        }
        Action::InlineSearch(InlineSearch::Update(payload)) => SearchReducerState {
            resource: payload.resource,
            tables: payload.tables.clone(),
            users: payload.users.clone(),
            dashboards: payload.dashboards.clone(),
            features: payload.features.clone(),
            search_term: payload.search_term.clone(),
            filters: filters::initial_filter_state(),
            ..SearchReducerState::clone(state)
        },
        Action::InlineSearch(InlineSearch::Success(payload)) => {
            let Some(payload) = payload else {
                return Err(StateError::missing_payload(action.kind()));
            };
            SearchReducerState {
                inline_results: InlineResultsState {
                    is_loading: false,
                    tables: payload.tables.clone(),
                    users: payload.users.clone(),
                    dashboards: payload.dashboards.clone(),
                    features: payload.features.clone(),
                },
                ..SearchReducerState::clone(state)
            }
        }
        Action::InlineSearch(InlineSearch::Failure) => SearchReducerState {
            inline_results: InlineResultsState::default(),
            ..SearchReducerState::clone(state)
        },
        Action::InlineSearch(InlineSearch::Request(request))
        | Action::InlineSearch(InlineSearch::RequestDebounce(request)) => SearchReducerState {
            search_term: request.term.clone(),
            inline_results: InlineResultsState::loading(),
            ..SearchReducerState::clone(state)
        },
        Action::InlineSearch(InlineSearch::Select(_))
        | Action::LoadPreviousSearch
        | Action::UrlDidUpdate(_)
        | Action::UpdateFilterByCategory(_)
        | Action::GetPopularTables(_) => return Ok(Arc::clone(state)),
    };
    Ok(Arc::new(next))
}
