use catalog_protocol::ResourceType;
use catalog_protocol::TableResource;
use serde_json::Value;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_partial_json;
use wiremock::matchers::method;
use wiremock::matchers::path;

pub const POPULAR_TABLES_PATH: &str = "/api/metadata/v0/popular_tables";
pub const SEARCH_PATH: &str = "/api/search/v1/search";

pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

pub async fn mount_popular_tables(server: &MockServer, tables: &[TableResource]) {
    Mock::given(method("GET"))
        .and(path(POPULAR_TABLES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": "Success",
            "results": tables,
        })))
        .mount(server)
        .await;
}

/// Body the search endpoint returns for one resource.
pub fn search_body(term: &str, resource: ResourceType, results: Value, total: usize) -> Value {
    let mut body = json!({
        "msg": "Success",
        "search_term": term,
    });
    body[resource.bucket_name()] = json!({
        "page_index": 0,
        "results": results,
        "total_results": total,
    });
    body
}

/// Answers searches for `resource` with `body`. Other resources fall
/// through to whatever else is mounted.
pub async fn mount_search(server: &MockServer, resource: ResourceType, body: Value) {
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(json!({ "resource": resource })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, http_method: &str, route: &str, status: u16) {
    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string("backend exploded"))
        .mount(server)
        .await;
}
