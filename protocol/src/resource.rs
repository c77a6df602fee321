use serde::Deserialize;
use serde::Serialize;
use strum_macros::AsRefStr;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;

/// Searchable entity categories. Each one owns a result bucket in the
/// search state and a filter entry in the filter state.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResourceType {
    #[default]
    Table,
    User,
    Dashboard,
    Feature,
}

impl ResourceType {
    /// Key of this resource's result bucket in search payloads.
    pub fn bucket_name(self) -> &'static str {
        match self {
            ResourceType::Table => "tables",
            ResourceType::User => "users",
            ResourceType::Dashboard => "dashboards",
            ResourceType::Feature => "features",
        }
    }
}

/// Why a search was issued. Forwarded to the search service, which uses it
/// for analytics only.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchType {
    ClearTerm,
    Filter,
    InlineSearch,
    InlineSelect,
    LoadUrl,
    Pagination,
    SubmitTerm,
}
