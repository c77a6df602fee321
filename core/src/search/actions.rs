//! Builders for search actions. All of them are pure.

use catalog_protocol::FilterReducerState;
use catalog_protocol::FilterValue;
use catalog_protocol::ResourceFilters;
use catalog_protocol::ResourceType;
use catalog_protocol::SearchType;
use catalog_protocol::search::InlineSearchResponsePayload;
use catalog_protocol::search::InlineSearchUpdatePayload;
use catalog_protocol::search::SearchAllResponsePayload;
use catalog_protocol::search::SearchResponsePayload;

use crate::action::Action;
use crate::action::InlineSearch;
use crate::action::InlineSearchRequest;
use crate::action::InlineSearchSelect;
use crate::action::SearchAll;
use crate::action::SearchAllRequest;
use crate::action::SearchResource;
use crate::action::SearchResourceRequest;
use crate::action::SubmitSearchRequest;
use crate::action::SubmitSearchResourceRequest;
use crate::action::UpdateFilterByCategoryRequest;
use crate::action::UpdateSearchState;
use crate::action::UpdateSearchStateRequest;
use crate::action::UrlDidUpdateRequest;

pub fn search_all(
    search_type: SearchType,
    term: impl Into<String>,
    resource: ResourceType,
    page_index: usize,
    use_filters: bool,
) -> Action {
    Action::SearchAll(SearchAll::Request(SearchAllRequest {
        search_type,
        term: term.into(),
        resource,
        page_index,
        use_filters,
    }))
}

pub fn search_all_success(results: SearchAllResponsePayload) -> Action {
    Action::SearchAll(SearchAll::Success(Some(results)))
}

pub fn search_all_failure() -> Action {
    Action::SearchAll(SearchAll::Failure)
}

pub fn search_resource(
    search_type: SearchType,
    term: impl Into<String>,
    resource: ResourceType,
    page_index: usize,
) -> Action {
    Action::SearchResource(SearchResource::Request(SearchResourceRequest {
        search_type,
        term: term.into(),
        resource,
        page_index,
    }))
}

pub fn search_resource_success(results: SearchResponsePayload) -> Action {
    Action::SearchResource(SearchResource::Success(Some(results)))
}

pub fn search_resource_failure() -> Action {
    Action::SearchResource(SearchResource::Failure)
}

pub fn get_inline_results(term: impl Into<String>) -> Action {
    Action::InlineSearch(InlineSearch::Request(InlineSearchRequest { term: term.into() }))
}

pub fn get_inline_results_debounce(term: impl Into<String>) -> Action {
    Action::InlineSearch(InlineSearch::RequestDebounce(InlineSearchRequest {
        term: term.into(),
    }))
}

pub fn get_inline_results_success(results: InlineSearchResponsePayload) -> Action {
    Action::InlineSearch(InlineSearch::Success(Some(results)))
}

pub fn get_inline_results_failure() -> Action {
    Action::InlineSearch(InlineSearch::Failure)
}

pub fn select_inline_result(
    resource_type: ResourceType,
    search_term: impl Into<String>,
    update_url: bool,
) -> Action {
    Action::InlineSearch(InlineSearch::Select(InlineSearchSelect {
        resource_type,
        search_term: search_term.into(),
        update_url,
    }))
}

pub fn update_from_inline_result(data: InlineSearchUpdatePayload) -> Action {
    Action::InlineSearch(InlineSearch::Update(data))
}

pub fn submit_search(search_term: impl Into<String>, use_filters: bool) -> Action {
    Action::SubmitSearch(SubmitSearchRequest {
        search_term: search_term.into(),
        use_filters,
    })
}

pub fn submit_search_resource(
    resource_filters: Option<ResourceFilters>,
    page_index: Option<usize>,
    search_term: Option<String>,
    resource: ResourceType,
    search_type: SearchType,
    update_url: bool,
) -> Action {
    Action::SubmitSearchResource(SubmitSearchResourceRequest {
        resource_filters,
        page_index,
        search_term,
        resource,
        search_type,
        update_url,
    })
}

pub fn update_search_state(request: UpdateSearchStateRequest) -> Action {
    Action::UpdateSearchState(UpdateSearchState::Request(request))
}

pub fn reset_search_state() -> Action {
    Action::UpdateSearchState(UpdateSearchState::Reset)
}

pub fn load_previous_search() -> Action {
    Action::LoadPreviousSearch
}

pub fn url_did_update(url_search: impl Into<String>) -> Action {
    Action::UrlDidUpdate(UrlDidUpdateRequest {
        url_search: url_search.into(),
    })
}

pub fn update_filter_by_category(
    category_id: impl Into<String>,
    value: Option<FilterValue>,
) -> Action {
    Action::UpdateFilterByCategory(UpdateFilterByCategoryRequest {
        category_id: category_id.into(),
        value,
    })
}

/// Shorthand for an [`UpdateSearchStateRequest`] that only replaces filters.
pub fn update_search_filters(filters: FilterReducerState, submit_search: bool) -> Action {
    update_search_state(UpdateSearchStateRequest {
        filters: Some(filters),
        submit_search,
        ..Default::default()
    })
}
