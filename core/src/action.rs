//! Everything that can be dispatched into the store.
//!
//! Each operation family is its own enum so reducers and workers can match
//! on exactly the phases they care about (`Request`, `Success`, `Failure`,
//! ...). Success variants carry their payload as an `Option` because a
//! success without a payload is a caller bug the reducers report instead of
//! papering over; the action creators in [`crate::search::actions`] always
//! fill it in.

use catalog_protocol::FilterReducerState;
use catalog_protocol::FilterValue;
use catalog_protocol::ResourceFilters;
use catalog_protocol::ResourceType;
use catalog_protocol::SearchType;
use catalog_protocol::TableResource;
use catalog_protocol::search::InlineSearchResponsePayload;
use catalog_protocol::search::InlineSearchUpdatePayload;
use catalog_protocol::search::SearchAllResponsePayload;
use catalog_protocol::search::SearchResponsePayload;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SubmitSearch(SubmitSearchRequest),
    SubmitSearchResource(SubmitSearchResourceRequest),
    UpdateSearchState(UpdateSearchState),
    SearchAll(SearchAll),
    SearchResource(SearchResource),
    InlineSearch(InlineSearch),
    LoadPreviousSearch,
    UrlDidUpdate(UrlDidUpdateRequest),
    UpdateFilterByCategory(UpdateFilterByCategoryRequest),
    GetPopularTables(GetPopularTables),
}

impl Action {
    /// Stable name of the action, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SubmitSearch(_) => "search/SUBMIT_SEARCH_REQUEST",
            Action::SubmitSearchResource(_) => "search/SUBMIT_SEARCH_RESOURCE_REQUEST",
            Action::UpdateSearchState(UpdateSearchState::Request(_)) => {
                "search/UPDATE_SEARCH_STATE_REQUEST"
            }
            Action::UpdateSearchState(UpdateSearchState::Reset) => {
                "search/UPDATE_SEARCH_STATE_RESET"
            }
            Action::SearchAll(SearchAll::Request(_)) => "search/SEARCH_ALL_REQUEST",
            Action::SearchAll(SearchAll::Success(_)) => "search/SEARCH_ALL_SUCCESS",
            Action::SearchAll(SearchAll::Failure) => "search/SEARCH_ALL_FAILURE",
            Action::SearchResource(SearchResource::Request(_)) => "search/SEARCH_RESOURCE_REQUEST",
            Action::SearchResource(SearchResource::Success(_)) => "search/SEARCH_RESOURCE_SUCCESS",
            Action::SearchResource(SearchResource::Failure) => "search/SEARCH_RESOURCE_FAILURE",
            Action::InlineSearch(InlineSearch::Request(_)) => "search/INLINE_SEARCH_REQUEST",
            Action::InlineSearch(InlineSearch::RequestDebounce(_)) => {
                "search/INLINE_SEARCH_REQUEST_DEBOUNCE"
            }
            Action::InlineSearch(InlineSearch::Success(_)) => "search/INLINE_SEARCH_SUCCESS",
            Action::InlineSearch(InlineSearch::Failure) => "search/INLINE_SEARCH_FAILURE",
            Action::InlineSearch(InlineSearch::Select(_)) => "search/INLINE_SEARCH_SELECT",
            Action::InlineSearch(InlineSearch::Update(_)) => "search/INLINE_SEARCH_UPDATE",
            Action::LoadPreviousSearch => "search/LOAD_PREVIOUS_SEARCH_REQUEST",
            Action::UrlDidUpdate(_) => "search/URL_DID_UPDATE_REQUEST",
            Action::UpdateFilterByCategory(_) => "search/UPDATE_FILTER_BY_CATEGORY",
            Action::GetPopularTables(GetPopularTables::Request) => "popularTables/REQUEST",
            Action::GetPopularTables(GetPopularTables::Success(_)) => "popularTables/SUCCESS",
            Action::GetPopularTables(GetPopularTables::Failure) => "popularTables/FAILURE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitSearchRequest {
    pub search_term: String,
    pub use_filters: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitSearchResourceRequest {
    /// Replaces the filters of `resource` when present.
    pub resource_filters: Option<ResourceFilters>,
    pub page_index: Option<usize>,
    /// Empty or absent keeps the current term.
    pub search_term: Option<String>,
    pub resource: ResourceType,
    pub search_type: SearchType,
    pub update_url: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UpdateSearchState {
    Request(UpdateSearchStateRequest),
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateSearchStateRequest {
    pub filters: Option<FilterReducerState>,
    pub resource: Option<ResourceType>,
    pub update_url: bool,
    pub submit_search: bool,
    pub clear_resource_results: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchAll {
    Request(SearchAllRequest),
    Success(Option<SearchAllResponsePayload>),
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchAllRequest {
    pub search_type: SearchType,
    pub term: String,
    pub resource: ResourceType,
    pub page_index: usize,
    pub use_filters: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchResource {
    Request(SearchResourceRequest),
    Success(Option<SearchResponsePayload>),
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResourceRequest {
    pub search_type: SearchType,
    pub term: String,
    pub resource: ResourceType,
    pub page_index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InlineSearch {
    Request(InlineSearchRequest),
    RequestDebounce(InlineSearchRequest),
    Success(Option<InlineSearchResponsePayload>),
    Failure,
    Select(InlineSearchSelect),
    Update(InlineSearchUpdatePayload),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineSearchRequest {
    pub term: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineSearchSelect {
    pub resource_type: ResourceType,
    pub search_term: String,
    pub update_url: bool,
}

/// The query component of the address bar after navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlDidUpdateRequest {
    pub url_search: String,
}

/// Set (`Some`) or clear (`None`) one filter category of the active resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateFilterByCategoryRequest {
    pub category_id: String,
    pub value: Option<FilterValue>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GetPopularTables {
    Request,
    Success(Vec<TableResource>),
    Failure,
}
