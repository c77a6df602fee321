use std::time::Duration;

use catalog_core::Action;
use catalog_core::Store;
use catalog_core::action::InlineSearch;
use catalog_core::action::SearchAll;
use catalog_core::config::SearchConfig;
use catalog_core::search::actions::get_inline_results;
use catalog_core::search::actions::get_inline_results_debounce;
use catalog_core::search::actions::select_inline_result;
use catalog_core::search::actions::submit_search;
use catalog_protocol::ResourceType;
use catalog_protocol::SearchType;
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

fn is_inline_done(action: &Action) -> bool {
    matches!(
        action,
        Action::InlineSearch(InlineSearch::Success(_) | InlineSearch::Failure)
    )
}

#[tokio::test]
async fn inline_search_fills_only_inline_results() {
    let search = FakeSearchApi::new()
        .with_tables("ord", vec![table("orders")])
        .with_users("ord", vec![user("ord@example.com")]);
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), search);

    test.runtime.dispatch(get_inline_results("ord"));
    wait_for_action(&mut test.actions, is_inline_done).await;

    let state = test.runtime.state();
    assert_eq!(state.search.search_term, "ord");
    assert!(!state.search.inline_results.is_loading);
    assert_eq!(state.search.inline_results.tables.results[0].name, "orders");
    assert_eq!(state.search.inline_results.users.total_results, 1);
    assert!(state.search.tables.results.is_empty());
    assert!(!state.search.did_search);

    let requests = test.search.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests.iter().all(|request| {
        request.search_type == SearchType::InlineSearch
            && request.page_index == 0
            && request.filters.is_empty()
    }));
}

#[tokio::test]
async fn debounced_requests_collapse_to_the_latest_term() {
    let settings = SearchConfig {
        inline_debounce_ms: 50,
        ..Default::default()
    };
    let mut test = test_runtime_with(
        Store::default(),
        FakeMetadataApi::returning(Vec::new()),
        FakeSearchApi::new().with_tables("ord", vec![table("orders")]),
        settings,
    );

    test.runtime.dispatch(get_inline_results_debounce("o"));
    test.runtime.dispatch(get_inline_results_debounce("or"));
    test.runtime.dispatch(get_inline_results_debounce("ord"));
    let seen = collect_actions_until(&mut test.actions, is_inline_done).await;

    let requested: Vec<&str> = seen
        .iter()
        .filter_map(|action| match action {
            Action::InlineSearch(InlineSearch::Request(request)) => Some(request.term.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(requested, vec!["ord"]);

    let terms: Vec<String> = test
        .search
        .requests()
        .into_iter()
        .map(|request| request.term)
        .collect();
    assert_eq!(terms, vec!["ord"; 4]);
    assert_eq!(
        test.runtime.state().search.inline_results.tables.results.len(),
        1
    );
}

#[tokio::test]
async fn selecting_ready_inline_results_promotes_them_without_searching() {
    let search = FakeSearchApi::new().with_tables("ord", vec![table("orders")]);
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), search);

    test.runtime.dispatch(get_inline_results("ord"));
    wait_for_action(&mut test.actions, is_inline_done).await;
    let requests_before = test.search.requests().len();

    test.runtime
        .dispatch(select_inline_result(ResourceType::Table, "ord", true));
    wait_for_action(&mut test.actions, |action| {
        matches!(action, Action::InlineSearch(InlineSearch::Update(_)))
    })
    .await;
    let navigation = test.navigation.clone();
    wait_until(|| !navigation.visits().is_empty()).await;

    let state = test.runtime.state();
    assert_eq!(state.search.search_term, "ord");
    assert_eq!(state.search.resource, ResourceType::Table);
    assert_eq!(state.search.tables, state.search.inline_results.tables);
    assert!(state.search.filters.is_empty());
    assert_eq!(test.search.requests().len(), requests_before);
    assert_eq!(
        test.navigation.visits(),
        vec![("/search?term=ord&resource=table&index=0".to_string(), false)]
    );
}

#[tokio::test]
async fn selecting_while_inline_results_load_runs_a_full_search() {
    let search = FakeSearchApi::new()
        .with_users("ord", vec![user("ord@example.com")])
        .delayed("ord", Duration::from_millis(100));
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), search);

    test.runtime.dispatch(get_inline_results("ord"));
    test.runtime
        .dispatch(select_inline_result(ResourceType::User, "ord", false));

    let request = wait_for_action(&mut test.actions, |action| {
        matches!(action, Action::SearchAll(SearchAll::Request(_)))
    })
    .await;
    let Action::SearchAll(SearchAll::Request(request)) = request else {
        unreachable!("matched above");
    };
    assert_eq!(request.search_type, SearchType::InlineSelect);
    assert_eq!(request.resource, ResourceType::User);
    assert_eq!(request.page_index, 0);
    assert!(!request.use_filters);

    wait_for_action(&mut test.actions, |action| {
        matches!(action, Action::SearchAll(SearchAll::Success(_)))
    })
    .await;
    let state = test.runtime.state();
    assert_eq!(state.search.resource, ResourceType::User);
    assert_eq!(state.search.users.total_results, 1);
    assert!(test.navigation.visits().is_empty());
}

/// In-flight searches are never cancelled, so a slow response for an older
/// term overwrites the results of a newer one.
#[tokio::test]
async fn older_response_arriving_last_wins() {
    let search = FakeSearchApi::new()
        .with_tables("slow", vec![table("slow_table")])
        .with_tables("fast", vec![table("fast_table")])
        .delayed("slow", Duration::from_millis(150));
    let mut test = test_runtime(FakeMetadataApi::returning(Vec::new()), search);

    test.runtime.dispatch(submit_search("slow", false));
    test.runtime.dispatch(submit_search("fast", false));

    let first = wait_for_action(&mut test.actions, |action| {
        matches!(action, Action::SearchAll(SearchAll::Success(_)))
    })
    .await;
    let Action::SearchAll(SearchAll::Success(Some(first))) = first else {
        unreachable!("matched above");
    };
    assert_eq!(first.search_term, "fast");

    wait_for_action(&mut test.actions, |action| {
        matches!(action, Action::SearchAll(SearchAll::Success(_)))
    })
    .await;
    let state = test.runtime.state();
    assert_eq!(state.search.search_term, "slow");
    assert_eq!(state.search.tables.results[0].name, "slow_table");
}
