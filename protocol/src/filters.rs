use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::resource::ResourceType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterOperation {
    And,
    Or,
}

/// Value selected for one filter category, e.g. `schema = "core"`.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterValue {
    pub value: String,
    #[serde(default, rename = "filterOperation")]
    pub filter_operation: Option<FilterOperation>,
}

impl FilterValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            filter_operation: None,
        }
    }
}

/// Category id to selected value, for a single resource type.
pub type ResourceFilters = BTreeMap<String, FilterValue>;

/// Filters for every resource type that has any.
pub type FilterReducerState = BTreeMap<ResourceType, ResourceFilters>;
