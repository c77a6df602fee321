use serde::Deserialize;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::filters::ResourceFilters;
use crate::resource::ResourceType;
use crate::resource::SearchType;
use crate::results::DashboardSearchResults;
use crate::results::FeatureSearchResults;
use crate::results::TableSearchResults;
use crate::results::UserSearchResults;

/// One call to the search service: a single resource, a single page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub resource: ResourceType,
    #[serde(rename = "searchTerm")]
    pub term: String,
    pub page_index: usize,
    #[serde(default)]
    pub filters: ResourceFilters,
    pub search_type: SearchType,
}

/// Response of a resource-scoped search. Only the bucket of the searched
/// resource is present; absent buckets must be left untouched by whoever
/// applies the response.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchResponsePayload {
    pub search_term: Option<String>,
    pub tables: Option<TableSearchResults>,
    pub users: Option<UserSearchResults>,
    pub dashboards: Option<DashboardSearchResults>,
    pub features: Option<FeatureSearchResults>,
}

impl SearchResponsePayload {
    /// Resource types whose bucket is present, in declaration order.
    pub fn resources(&self) -> Vec<ResourceType> {
        let mut present = Vec::new();
        if self.tables.is_some() {
            present.push(ResourceType::Table);
        }
        if self.users.is_some() {
            present.push(ResourceType::User);
        }
        if self.dashboards.is_some() {
            present.push(ResourceType::Dashboard);
        }
        if self.features.is_some() {
            present.push(ResourceType::Feature);
        }
        present
    }
}

/// Result of searching every resource at once.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchAllResponsePayload {
    pub search_term: String,
    pub resource: ResourceType,
    pub tables: TableSearchResults,
    pub users: UserSearchResults,
    pub dashboards: DashboardSearchResults,
    pub features: FeatureSearchResults,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineSearchResponsePayload {
    pub tables: TableSearchResults,
    pub users: UserSearchResults,
    pub dashboards: DashboardSearchResults,
    pub features: FeatureSearchResults,
}

/// Promotes inline results to the full search state without a new request.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineSearchUpdatePayload {
    pub search_term: String,
    pub resource: ResourceType,
    pub tables: TableSearchResults,
    pub users: UserSearchResults,
    pub dashboards: DashboardSearchResults,
    pub features: FeatureSearchResults,
}
