use serde::Deserialize;
use serde::Serialize;

use crate::results::TableResource;

/// Body of `GET /api/metadata/v0/popular_tables`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PopularTablesResponse {
    pub msg: String,
    pub results: Vec<TableResource>,
}
