use catalog_protocol::FilterReducerState;
use catalog_protocol::ResourceType;
use catalog_protocol::results::DashboardSearchResults;
use catalog_protocol::results::FeatureSearchResults;
use catalog_protocol::results::TableSearchResults;
use catalog_protocol::results::UserSearchResults;

/// Results shown in the typeahead dropdown. Kept apart from the full-page
/// buckets so typing never disturbs the page being viewed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineResultsState {
    pub is_loading: bool,
    pub tables: TableSearchResults,
    pub users: UserSearchResults,
    pub dashboards: DashboardSearchResults,
    pub features: FeatureSearchResults,
}

impl InlineResultsState {
    pub(crate) fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReducerState {
    pub search_term: String,
    /// Active resource tab.
    pub resource: ResourceType,
    pub is_loading: bool,
    pub tables: TableSearchResults,
    pub users: UserSearchResults,
    pub dashboards: DashboardSearchResults,
    pub features: FeatureSearchResults,
    pub inline_results: InlineResultsState,
    pub filters: FilterReducerState,
    /// True once a search has completed, false after the search state was
    /// updated but not yet re-run.
    pub did_search: bool,
}

impl SearchReducerState {
    /// Page index of the bucket belonging to `resource`.
    pub fn page_index(&self, resource: ResourceType) -> usize {
        match resource {
            ResourceType::Table => self.tables.page_index,
            ResourceType::User => self.users.page_index,
            ResourceType::Dashboard => self.dashboards.page_index,
            ResourceType::Feature => self.features.page_index,
        }
    }

    pub fn total_results(&self, resource: ResourceType) -> usize {
        match resource {
            ResourceType::Table => self.tables.total_results,
            ResourceType::User => self.users.total_results,
            ResourceType::Dashboard => self.dashboards.total_results,
            ResourceType::Feature => self.features.total_results,
        }
    }

    /// Resets the bucket of `resource`, leaving every other field alone.
    pub(crate) fn clear_bucket(&mut self, resource: ResourceType) {
        match resource {
            ResourceType::Table => self.tables = Default::default(),
            ResourceType::User => self.users = Default::default(),
            ResourceType::Dashboard => self.dashboards = Default::default(),
            ResourceType::Feature => self.features = Default::default(),
        }
    }
}
