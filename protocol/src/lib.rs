//! Data model shared by the catalog state machine, its HTTP backend client
//! and the CLI.

pub mod filters;
pub mod popular_tables;
pub mod resource;
pub mod results;
pub mod search;
pub mod search_url;

pub use filters::FilterOperation;
pub use filters::FilterReducerState;
pub use filters::FilterValue;
pub use filters::ResourceFilters;
pub use resource::ResourceType;
pub use resource::SearchType;
pub use results::Badge;
pub use results::DashboardResource;
pub use results::FeatureResource;
pub use results::SearchResults;
pub use results::TableResource;
pub use results::UserResource;
pub use search_url::SearchUrl;
