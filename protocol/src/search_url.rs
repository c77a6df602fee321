use std::str::FromStr;

use url::form_urlencoded;

use crate::filters::ResourceFilters;
use crate::resource::ResourceType;

pub const SEARCH_PATH: &str = "/search";

/// Search state as carried in the address bar:
/// `/search?term=…&resource=…&index=…&filters=<json>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchUrl {
    pub term: String,
    pub resource: Option<ResourceType>,
    pub index: Option<usize>,
    pub filters: Option<ResourceFilters>,
}

impl SearchUrl {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Default::default()
        }
    }

    pub fn with_resource(mut self, resource: ResourceType) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_filters(mut self, filters: ResourceFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Parses the query component of a search URL. Accepts a bare query
    /// (`term=a`), one with a leading `?`, or a full path. Parameters that
    /// cannot be understood are treated as absent.
    pub fn parse(input: &str) -> Self {
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None => input,
        };
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "term" => parsed.term = value.into_owned(),
                "resource" => parsed.resource = ResourceType::from_str(&value).ok(),
                "index" => parsed.index = value.parse().ok(),
                "filters" => parsed.filters = serde_json::from_str(&value).ok(),
                _ => {}
            }
        }
        parsed
    }

    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.term.is_empty() {
            serializer.append_pair("term", &self.term);
        }
        if let Some(resource) = self.resource {
            serializer.append_pair("resource", resource.as_ref());
        }
        if let Some(index) = self.index {
            serializer.append_pair("index", &index.to_string());
        }
        if let Some(filters) = self.filters.as_ref().filter(|f| !f.is_empty())
            && let Ok(json) = serde_json::to_string(filters)
        {
            serializer.append_pair("filters", &json);
        }
        serializer.finish()
    }

    pub fn to_path(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            SEARCH_PATH.to_string()
        } else {
            format!("{SEARCH_PATH}?{query}")
        }
    }
}
