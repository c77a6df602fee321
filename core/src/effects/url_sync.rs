//! Keeps the address bar and the search state in step.

use catalog_protocol::FilterReducerState;
use catalog_protocol::ResourceFilters;
use catalog_protocol::ResourceType;
use catalog_protocol::SearchType;
use catalog_protocol::SearchUrl;
use catalog_protocol::search_url::SEARCH_PATH;
use tracing::debug;

use super::WorkerContext;
use crate::action::UpdateSearchStateRequest;
use crate::action::UrlDidUpdateRequest;
use crate::search::SearchReducerState;
use crate::search::actions::search_all;
use crate::search::actions::search_resource;
use crate::search::actions::submit_search_resource;
use crate::search::actions::update_search_state;

/// URL describing `state`: its term, active resource, that resource's page
/// and filters.
pub(super) fn url_for_state(state: &SearchReducerState) -> SearchUrl {
    SearchUrl::new(state.search_term.clone())
        .with_resource(state.resource)
        .with_index(state.page_index(state.resource))
        .with_filters(resource_filters(&state.filters, state.resource))
}

pub(super) fn resource_filters(
    filters: &FilterReducerState,
    resource: ResourceType,
) -> ResourceFilters {
    filters.get(&resource).cloned().unwrap_or_default()
}

pub(super) fn navigate(ctx: &WorkerContext, url: &SearchUrl, replace: bool) {
    ctx.services.navigation.navigate(&url.to_path(), replace);
}

pub(super) async fn load_previous_search_worker(ctx: WorkerContext) {
    let state = ctx.select();
    if state.search.search_term.is_empty() {
        ctx.services.navigation.navigate(SEARCH_PATH, false);
    } else {
        navigate(&ctx, &url_for_state(&state.search), false);
    }
}

/// Reconciles the state with a URL the user navigated to. Only the first
/// difference found (term, then filters, then resource, then page) triggers
/// a follow-up.
pub(super) async fn url_did_update_worker(ctx: WorkerContext, request: UrlDidUpdateRequest) {
    let url = SearchUrl::parse(&request.url_search);
    let state = ctx.select();
    let search = &state.search;

    let resource = url.resource.unwrap_or(search.resource);
    let index = url.index.unwrap_or(0);
    let url_filters = url.filters.unwrap_or_default();
    let filters_changed = url_filters != resource_filters(&search.filters, resource);

    if !url.term.is_empty() && url.term != search.search_term {
        if filters_changed {
            let mut filters = search.filters.clone();
            if url_filters.is_empty() {
                filters.remove(&resource);
            } else {
                filters.insert(resource, url_filters);
            }
            ctx.put(update_search_state(UpdateSearchStateRequest {
                filters: Some(filters),
                ..Default::default()
            }));
        }
        ctx.put(search_all(SearchType::LoadUrl, url.term, resource, index, true));
    } else if filters_changed {
        ctx.put(submit_search_resource(
            Some(url_filters),
            Some(index),
            None,
            resource,
            SearchType::LoadUrl,
            false,
        ));
    } else if resource != search.resource {
        ctx.put(update_search_state(UpdateSearchStateRequest {
            resource: Some(resource),
            ..Default::default()
        }));
    } else if url.index.is_some() && index != search.page_index(resource) {
        ctx.put(search_resource(
            SearchType::Pagination,
            search.search_term.clone(),
            resource,
            index,
        ));
    } else {
        debug!(url = %request.url_search, "url matches search state");
    }
}
