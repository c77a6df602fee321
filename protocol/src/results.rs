use serde::Deserialize;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// One page of results for a single resource type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchResults<T> {
    pub page_index: usize,
    pub results: Vec<T>,
    pub total_results: usize,
}

impl<T> SearchResults<T> {
    pub fn new(page_index: usize, results: Vec<T>, total_results: usize) -> Self {
        Self {
            page_index,
            results,
            total_results,
        }
    }
}

// Manual impl: the derive would require `T: Default`.
impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self {
            page_index: 0,
            results: Vec::new(),
            total_results: 0,
        }
    }
}

pub type TableSearchResults = SearchResults<TableResource>;
pub type UserSearchResults = SearchResults<UserResource>;
pub type DashboardSearchResults = SearchResults<DashboardResource>;
pub type FeatureSearchResults = SearchResults<FeatureResource>;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Badge {
    pub badge_name: String,
    pub category: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableResource {
    pub key: String,
    pub name: String,
    pub cluster: String,
    pub database: String,
    pub schema: String,
    pub description: String,
    pub schema_description: Option<String>,
    pub last_updated_timestamp: Option<i64>,
    pub is_view: Option<bool>,
    pub badges: Vec<Badge>,
}

impl TableResource {
    /// `database://cluster.schema/name`, the form the UI links with.
    pub fn qualified_name(&self) -> String {
        format!(
            "{}://{}.{}/{}",
            self.database, self.cluster, self.schema, self.name
        )
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserResource {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub team_name: Option<String>,
    pub role_name: Option<String>,
    pub manager_fullname: Option<String>,
    pub employee_type: Option<String>,
    pub github_username: Option<String>,
    pub slack_id: Option<String>,
    pub profile_url: Option<String>,
    pub is_active: bool,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardResource {
    pub uri: String,
    pub url: String,
    pub name: String,
    pub cluster: String,
    pub group_name: String,
    pub group_url: Option<String>,
    pub product: String,
    pub description: Option<String>,
    pub last_successful_run_timestamp: Option<i64>,
    pub badges: Vec<Badge>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureResource {
    pub key: String,
    pub name: String,
    pub version: String,
    pub feature_group: String,
    pub entity: Option<String>,
    pub availability: Vec<String>,
    pub description: Option<String>,
    pub last_updated_timestamp: Option<i64>,
    pub badges: Vec<Badge>,
}
