use catalog_core::Action;
use catalog_core::Store;
use catalog_core::action::SearchAll;
use catalog_core::action::SearchResource;
use catalog_core::action::UpdateSearchStateRequest;
use catalog_core::config::SearchConfig;
use catalog_core::search::actions::search_all;
use catalog_core::search::actions::submit_search;
use catalog_core::search::actions::submit_search_resource;
use catalog_core::search::actions::update_filter_by_category;
use catalog_core::search::actions::update_search_filters;
use catalog_core::search::actions::update_search_state;
use catalog_protocol::FilterReducerState;
use catalog_protocol::FilterValue;
use catalog_protocol::ResourceFilters;
use catalog_protocol::ResourceType;
use catalog_protocol::SearchType;
use catalog_protocol::SearchUrl;
use core_test_support::FakeMetadataApi;
use core_test_support::FakeSearchApi;
use core_test_support::collect_actions_until;
use core_test_support::table;
use core_test_support::test_runtime;
use core_test_support::test_runtime_with;
use core_test_support::user;
use core_test_support::wait_for_action;
use core_test_support::wait_until;
use pretty_assertions::assert_eq;

fn is_search_all_done(action: &Action) -> bool {
    matches!(
        action,
        Action::SearchAll(SearchAll::Success(_) | SearchAll::Failure)
    )
}

fn is_search_resource_done(action: &Action) -> bool {
    matches!(
        action,
        Action::SearchResource(SearchResource::Success(_) | SearchResource::Failure)
    )
}

fn schema_filter(schema: &str) -> ResourceFilters {
    let mut filters = ResourceFilters::new();
    filters.insert("schema".to_string(), FilterValue::new(schema));
    filters
}

#[tokio::test]
async fn submit_search_queries_every_resource_and_updates_url() {
    let search = FakeSearchApi::new()
        .with_tables("orders", vec![table("orders"), table("order_items")])
        .with_users("orders", vec![user("ada@example.com")]);
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), search);

    test.runtime.dispatch(submit_search("orders", false));
    let seen = collect_actions_until(&mut test.actions, is_search_all_done).await;

    let kinds: Vec<&str> = seen.iter().map(Action::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "search/SUBMIT_SEARCH_REQUEST",
            "search/SEARCH_ALL_REQUEST",
            "search/SEARCH_ALL_SUCCESS",
        ]
    );

    let state = test.runtime.state();
    assert_eq!(state.search.search_term, "orders");
    assert!(state.search.did_search);
    assert!(!state.search.is_loading);
    assert_eq!(state.search.tables.total_results, 2);
    assert_eq!(state.search.users.results[0].email, "ada@example.com");
    assert_eq!(state.search.inline_results.tables, state.search.tables);

    let mut resources: Vec<ResourceType> = test
        .search
        .requests()
        .iter()
        .map(|request| request.resource)
        .collect();
    resources.sort();
    assert_eq!(
        resources,
        vec![
            ResourceType::Table,
            ResourceType::User,
            ResourceType::Dashboard,
            ResourceType::Feature,
        ]
    );
    assert!(test.search.requests().iter().all(|request| {
        request.page_index == 0
            && request.filters.is_empty()
            && request.search_type == SearchType::SubmitTerm
    }));

    assert_eq!(
        test.navigation.visits(),
        vec![("/search?term=orders&resource=table&index=0".to_string(), false)]
    );
}

#[tokio::test]
async fn search_all_pages_the_requested_resource_and_applies_filters() {
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), FakeSearchApi::new());
    let mut filters = FilterReducerState::new();
    filters.insert(ResourceType::Table, schema_filter("core"));

    test.runtime.dispatch(update_search_filters(filters, false));
    test.runtime.dispatch(search_all(
        SearchType::LoadUrl,
        "orders",
        ResourceType::User,
        3,
        true,
    ));
    wait_for_action(&mut test.actions, is_search_all_done).await;

    let requests = test.search.requests();
    let table_request = requests
        .iter()
        .find(|request| request.resource == ResourceType::Table)
        .unwrap();
    assert_eq!(table_request.page_index, 0);
    assert_eq!(table_request.filters, schema_filter("core"));

    let user_request = requests
        .iter()
        .find(|request| request.resource == ResourceType::User)
        .unwrap();
    assert_eq!(user_request.page_index, 3);
    assert!(user_request.filters.is_empty());

    let state = test.runtime.state();
    assert_eq!(state.search.resource, ResourceType::User);
    assert_eq!(state.search.users.page_index, 3);
    assert_eq!(
        state.search.filters.get(&ResourceType::Table),
        Some(&schema_filter("core"))
    );
}

#[tokio::test]
async fn one_failing_resource_fails_the_whole_search() {
    let search = FakeSearchApi::new()
        .with_tables("orders", vec![table("orders")])
        .failing_for(ResourceType::Dashboard);
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), search);

    test.runtime.dispatch(submit_search("orders", false));
    let last = wait_for_action(&mut test.actions, is_search_all_done).await;
    assert_eq!(last, Action::SearchAll(SearchAll::Failure));

    let state = test.runtime.state();
    assert_eq!(state.search.search_term, "orders");
    assert!(state.search.tables.results.is_empty());
    assert!(!state.search.is_loading);
    assert!(!state.search.did_search);
}

#[tokio::test]
async fn disabled_resources_are_not_queried() {
    let settings = SearchConfig {
        resources: vec![ResourceType::Table],
        ..Default::default()
    };
    let search = FakeSearchApi::new()
        .with_tables("orders", vec![table("orders")])
        .with_users("orders", vec![user("ada@example.com")]);
    let mut test = test_runtime_with(
        Store::default(),
        FakeMetadataApi::returning(Vec::new()),
        search,
        settings,
    );

    test.runtime.dispatch(submit_search("orders", false));
    wait_for_action(&mut test.actions, is_search_all_done).await;

    let requests = test.search.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].resource, ResourceType::Table);

    let state = test.runtime.state();
    assert_eq!(state.search.tables.results.len(), 1);
    assert!(state.search.users.results.is_empty());
}

#[tokio::test]
async fn filter_by_category_searches_the_active_resource() {
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), FakeSearchApi::new());

    test.runtime
        .dispatch(update_filter_by_category("schema", Some(FilterValue::new("core"))));
    let seen = collect_actions_until(&mut test.actions, is_search_resource_done).await;

    let kinds: Vec<&str> = seen.iter().map(Action::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "search/UPDATE_FILTER_BY_CATEGORY",
            "search/SUBMIT_SEARCH_RESOURCE_REQUEST",
            "search/SEARCH_RESOURCE_REQUEST",
            "search/SEARCH_RESOURCE_SUCCESS",
        ]
    );

    let state = test.runtime.state();
    assert_eq!(
        state.search.filters.get(&ResourceType::Table),
        Some(&schema_filter("core"))
    );

    let requests = test.search.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].resource, ResourceType::Table);
    assert_eq!(requests[0].search_type, SearchType::Filter);
    assert_eq!(requests[0].filters, schema_filter("core"));

    let expected_url = SearchUrl::new("")
        .with_resource(ResourceType::Table)
        .with_index(0)
        .with_filters(schema_filter("core"))
        .to_path();
    assert_eq!(test.navigation.last(), Some((expected_url, false)));

    test.runtime.dispatch(update_filter_by_category("schema", None));
    wait_for_action(&mut test.actions, is_search_resource_done).await;
    assert_eq!(
        test.runtime.state().search.filters.get(&ResourceType::Table),
        None
    );
}

#[tokio::test]
async fn filter_update_with_submit_reruns_search_all_with_filters() {
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), FakeSearchApi::new());
    let mut filters = FilterReducerState::new();
    filters.insert(ResourceType::Table, schema_filter("finance"));

    test.runtime.dispatch(update_search_filters(filters, true));
    let request = wait_for_action(&mut test.actions, |action| {
        matches!(action, Action::SearchAll(SearchAll::Request(_)))
    })
    .await;
    let Action::SearchAll(SearchAll::Request(request)) = request else {
        unreachable!("matched above");
    };
    assert_eq!(request.search_type, SearchType::Filter);
    assert!(request.use_filters);
    assert_eq!(request.page_index, 0);

    wait_for_action(&mut test.actions, is_search_all_done).await;
    let table_request = test
        .search
        .requests()
        .into_iter()
        .find(|request| request.resource == ResourceType::Table)
        .unwrap();
    assert_eq!(table_request.filters, schema_filter("finance"));
}

#[tokio::test]
async fn switching_resource_replaces_the_url() {
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), FakeSearchApi::new());

    test.runtime.dispatch(update_search_state(UpdateSearchStateRequest {
        resource: Some(ResourceType::User),
        update_url: true,
        ..Default::default()
    }));
    wait_for_action(&mut test.actions, |action| {
        matches!(action, Action::UpdateSearchState(_))
    })
    .await;
    let navigation = test.navigation.clone();
    wait_until(|| !navigation.visits().is_empty()).await;

    assert_eq!(
        test.navigation.visits(),
        vec![("/search?resource=user&index=0".to_string(), true)]
    );
    assert_eq!(test.runtime.state().search.resource, ResourceType::User);
    assert!(test.search.requests().is_empty());
}

#[tokio::test]
async fn pagination_keeps_the_current_term() {
    let search = FakeSearchApi::new().with_tables("orders", vec![table("orders")]);
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), search);

    test.runtime.dispatch(submit_search("orders", false));
    wait_for_action(&mut test.actions, is_search_all_done).await;

    test.runtime.dispatch(submit_search_resource(
        None,
        Some(2),
        None,
        ResourceType::Table,
        SearchType::Pagination,
        true,
    ));
    wait_for_action(&mut test.actions, is_search_resource_done).await;

    let last_request = test.search.requests().pop().unwrap();
    assert_eq!(last_request.term, "orders");
    assert_eq!(last_request.page_index, 2);
    assert_eq!(last_request.search_type, SearchType::Pagination);

    let state = test.runtime.state();
    assert_eq!(state.search.search_term, "orders");
    assert_eq!(state.search.page_index(ResourceType::Table), 2);
    assert_eq!(
        test.navigation.last(),
        Some(("/search?term=orders&resource=table&index=2".to_string(), false))
    );
}
