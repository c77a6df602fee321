use catalog_core::Action;
use catalog_core::action::GetPopularTables;
use catalog_core::popular_tables::get_popular_tables;
use core_test_support::FakeMetadataApi;
use core_test_support::FakeSearchApi;
use core_test_support::table;
use core_test_support::test_runtime;
use core_test_support::wait_for_action;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn fetch_loads_popular_tables() {
    let mut test = test_runtime(
        FakeMetadataApi::returning(vec![table("orders"), table("customers")]),
        FakeSearchApi::new(),
    );

    test.runtime.dispatch(get_popular_tables());
    wait_for_action(&mut test.actions, |action| {
        matches!(action, Action::GetPopularTables(GetPopularTables::Success(_)))
    })
    .await;

    let state = test.runtime.state();
    assert!(state.popular_tables.is_loaded);
    let names: Vec<&str> = state
        .popular_tables
        .popular_tables
        .iter()
        .map(|table| table.name.as_str())
        .collect();
    assert_eq!(names, vec!["orders", "customers"]);
    assert_eq!(test.metadata.calls(), 1);
}

#[tokio::test]
async fn failed_fetch_marks_loaded_with_no_tables() {
    let mut test = test_runtime(FakeMetadataApi::failing(), FakeSearchApi::new());

    test.runtime.dispatch(get_popular_tables());
    wait_for_action(&mut test.actions, |action| {
        matches!(action, Action::GetPopularTables(GetPopularTables::Failure))
    })
    .await;

    let state = test.runtime.state();
    assert!(state.popular_tables.is_loaded);
    assert!(state.popular_tables.popular_tables.is_empty());
    assert!(test.search.requests().is_empty());
}
