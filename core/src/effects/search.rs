use catalog_protocol::ResourceFilters;
use catalog_protocol::ResourceType;
use catalog_protocol::SearchType;
use catalog_protocol::SearchUrl;
use catalog_protocol::results::DashboardSearchResults;
use catalog_protocol::results::FeatureSearchResults;
use catalog_protocol::results::TableSearchResults;
use catalog_protocol::results::UserSearchResults;
use catalog_protocol::search::InlineSearchResponsePayload;
use catalog_protocol::search::InlineSearchUpdatePayload;
use catalog_protocol::search::SearchAllResponsePayload;
use catalog_protocol::search::SearchRequest;
use catalog_protocol::search::SearchResponsePayload;
use futures::future::try_join_all;
use strum::IntoEnumIterator;
use tracing::debug;
use tracing::warn;

use super::WorkerContext;
use super::url_sync::navigate;
use super::url_sync::resource_filters;
use super::url_sync::url_for_state;
use crate::action::InlineSearchSelect;
use crate::action::SearchAllRequest;
use crate::action::SearchResourceRequest;
use crate::action::SubmitSearchRequest;
use crate::action::SubmitSearchResourceRequest;
use crate::action::UpdateFilterByCategoryRequest;
use crate::action::UpdateSearchStateRequest;
use crate::search::actions::get_inline_results_failure;
use crate::search::actions::get_inline_results_success;
use crate::search::actions::search_all;
use crate::search::actions::search_all_failure;
use crate::search::actions::search_all_success;
use crate::search::actions::search_resource;
use crate::search::actions::search_resource_failure;
use crate::search::actions::search_resource_success;
use crate::search::actions::submit_search_resource;
use crate::search::actions::update_from_inline_result;
use crate::search::filters::with_category;

/// One bucket per resource type, filled from single-resource responses.
#[derive(Default)]
struct Buckets {
    tables: TableSearchResults,
    users: UserSearchResults,
    dashboards: DashboardSearchResults,
    features: FeatureSearchResults,
}

impl Buckets {
    /// Keeps only the bucket of `resource`; a response missing it leaves
    /// the bucket empty.
    fn absorb(&mut self, resource: ResourceType, response: SearchResponsePayload) {
        if !response.resources().contains(&resource) {
            debug!(resource = %resource, "search response has no bucket for the queried resource");
        }
        match resource {
            ResourceType::Table => self.tables = response.tables.unwrap_or_default(),
            ResourceType::User => self.users = response.users.unwrap_or_default(),
            ResourceType::Dashboard => {
                self.dashboards = response.dashboards.unwrap_or_default();
            }
            ResourceType::Feature => self.features = response.features.unwrap_or_default(),
        }
    }
}

/// Queries every enabled resource concurrently. Fails as a whole when any
/// single call fails.
async fn search_enabled_resources(
    ctx: &WorkerContext,
    request_for: impl Fn(ResourceType) -> SearchRequest,
) -> anyhow::Result<Buckets> {
    let resources: Vec<ResourceType> = ResourceType::iter()
        .filter(|&resource| ctx.settings.is_enabled(resource))
        .collect();
    let calls = resources
        .iter()
        .map(|&resource| ctx.services.search.search(request_for(resource)));
    let responses = try_join_all(calls).await?;

    let mut buckets = Buckets::default();
    for (resource, response) in resources.into_iter().zip(responses) {
        buckets.absorb(resource, response);
    }
    Ok(buckets)
}

pub(super) async fn submit_search_worker(ctx: WorkerContext, request: SubmitSearchRequest) {
    let state = ctx.select();
    let resource = state.search.resource;
    ctx.put(search_all(
        SearchType::SubmitTerm,
        request.search_term.clone(),
        resource,
        0,
        request.use_filters,
    ));

    let mut url = SearchUrl::new(request.search_term)
        .with_resource(resource)
        .with_index(0);
    if request.use_filters {
        url = url.with_filters(resource_filters(&state.search.filters, resource));
    }
    navigate(&ctx, &url, false);
}

pub(super) async fn submit_search_resource_worker(
    ctx: WorkerContext,
    request: SubmitSearchResourceRequest,
) {
    let state = ctx.select();
    let term = request
        .search_term
        .filter(|term| !term.is_empty())
        .unwrap_or_else(|| state.search.search_term.clone());
    let page_index = request.page_index.unwrap_or(0);
    ctx.put(search_resource(
        request.search_type,
        term.clone(),
        request.resource,
        page_index,
    ));

    if request.update_url {
        let url = SearchUrl::new(term)
            .with_resource(request.resource)
            .with_index(page_index)
            .with_filters(resource_filters(&state.search.filters, request.resource));
        navigate(&ctx, &url, false);
    }
}

pub(super) async fn update_search_state_worker(
    ctx: WorkerContext,
    request: UpdateSearchStateRequest,
) {
    let state = ctx.select();
    if request.submit_search {
        ctx.put(search_all(
            SearchType::Filter,
            state.search.search_term.clone(),
            state.search.resource,
            0,
            true,
        ));
    } else if request.update_url {
        navigate(&ctx, &url_for_state(&state.search), true);
    }
}

pub(super) async fn search_all_worker(ctx: WorkerContext, request: SearchAllRequest) {
    let state = ctx.select();
    let filters = &state.search.filters;
    let result = search_enabled_resources(&ctx, |resource| SearchRequest {
        resource,
        term: request.term.clone(),
        page_index: if resource == request.resource {
            request.page_index
        } else {
            0
        },
        filters: if request.use_filters {
            resource_filters(filters, resource)
        } else {
            ResourceFilters::new()
        },
        search_type: request.search_type,
    })
    .await;

    match result {
        Ok(buckets) => ctx.put(search_all_success(SearchAllResponsePayload {
            search_term: request.term,
            resource: request.resource,
            tables: buckets.tables,
            users: buckets.users,
            dashboards: buckets.dashboards,
            features: buckets.features,
        })),
        Err(err) => {
            warn!(term = %request.term, "search all failed: {err:#}");
            ctx.put(search_all_failure());
        }
    }
}

pub(super) async fn search_resource_worker(ctx: WorkerContext, request: SearchResourceRequest) {
    let state = ctx.select();
    let search = SearchRequest {
        resource: request.resource,
        term: request.term,
        page_index: request.page_index,
        filters: resource_filters(&state.search.filters, request.resource),
        search_type: request.search_type,
    };
    match ctx.services.search.search(search).await {
        Ok(payload) => ctx.put(search_resource_success(payload)),
        Err(err) => {
            warn!(resource = %request.resource, "resource search failed: {err:#}");
            ctx.put(search_resource_failure());
        }
    }
}

pub(super) async fn inline_search_worker(ctx: WorkerContext, term: String) {
    let result = search_enabled_resources(&ctx, |resource| SearchRequest {
        resource,
        term: term.clone(),
        page_index: 0,
        filters: ResourceFilters::new(),
        search_type: SearchType::InlineSearch,
    })
    .await;

    match result {
        Ok(buckets) => ctx.put(get_inline_results_success(InlineSearchResponsePayload {
            tables: buckets.tables,
            users: buckets.users,
            dashboards: buckets.dashboards,
            features: buckets.features,
        })),
        Err(err) => {
            warn!(term = %term, "inline search failed: {err:#}");
            ctx.put(get_inline_results_failure());
        }
    }
}

/// Promotes the inline results when they are ready; otherwise runs the full
/// search for the selected resource.
pub(super) async fn select_inline_result_worker(ctx: WorkerContext, request: InlineSearchSelect) {
    let state = ctx.select();
    let inline = &state.search.inline_results;
    if inline.is_loading {
        debug!(term = %request.search_term, "inline results pending; searching");
        ctx.put(search_all(
            SearchType::InlineSelect,
            request.search_term.clone(),
            request.resource_type,
            0,
            false,
        ));
    } else {
        ctx.put(update_from_inline_result(InlineSearchUpdatePayload {
            search_term: request.search_term.clone(),
            resource: request.resource_type,
            tables: inline.tables.clone(),
            users: inline.users.clone(),
            dashboards: inline.dashboards.clone(),
            features: inline.features.clone(),
        }));
    }

    if request.update_url {
        let url = SearchUrl::new(request.search_term)
            .with_resource(request.resource_type)
            .with_index(0);
        navigate(&ctx, &url, false);
    }
}

pub(super) async fn update_filter_by_category_worker(
    ctx: WorkerContext,
    request: UpdateFilterByCategoryRequest,
) {
    let state = ctx.select();
    let resource = state.search.resource;
    let filters = with_category(
        &state.search.filters,
        resource,
        &request.category_id,
        request.value,
    );
    ctx.put(submit_search_resource(
        Some(filters),
        Some(0),
        None,
        resource,
        SearchType::Filter,
        true,
    ));
}
