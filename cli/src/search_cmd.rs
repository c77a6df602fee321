use anyhow::Result;
use anyhow::bail;
use catalog_core::Action;
use catalog_core::action::GetPopularTables;
use catalog_core::action::InlineSearch;
use catalog_core::action::SearchAll;
use catalog_core::action::UpdateSearchStateRequest;
use catalog_core::popular_tables::get_popular_tables;
use catalog_core::search::actions::get_inline_results;
use catalog_core::search::actions::search_all;
use catalog_core::search::actions::update_search_state;
use catalog_protocol::FilterReducerState;
use catalog_protocol::FilterValue;
use catalog_protocol::ResourceFilters;
use catalog_protocol::ResourceType;
use catalog_protocol::SearchType;
use clap::ArgAction;

use crate::render;
use crate::session::Session;

#[derive(Debug, clap::Parser)]
pub struct PopularArgs {
    /// Print the tables as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Parser)]
pub struct SearchArgs {
    /// Search term.
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Resource whose page is shown: table, user, dashboard or feature.
    #[arg(long, default_value = "table")]
    pub resource: ResourceType,

    /// Page of the chosen resource.
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Filter the chosen resource (repeatable).
    #[arg(
        long = "filter",
        value_name = "CATEGORY=VALUE",
        value_parser = parse_filter,
        action = ArgAction::Append
    )]
    pub filters: Vec<(String, FilterValue)>,

    /// Print the results as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Parser)]
pub struct InlineArgs {
    /// Partial search term.
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Print the suggestions as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parses `CATEGORY=VALUE`. Both sides are trimmed and must be non-empty.
pub fn parse_filter(raw: &str) -> Result<(String, FilterValue), String> {
    let Some((category, value)) = raw.split_once('=') else {
        return Err(format!("expected CATEGORY=VALUE, got `{raw}`"));
    };
    let category = category.trim();
    let value = value.trim();
    if category.is_empty() || value.is_empty() {
        return Err(format!("expected CATEGORY=VALUE, got `{raw}`"));
    }
    Ok((category.to_string(), FilterValue::new(value)))
}

pub(crate) async fn run_popular(session: &mut Session, args: PopularArgs) -> Result<String> {
    let done = session
        .run_until(get_popular_tables(), |action| {
            matches!(
                action,
                Action::GetPopularTables(GetPopularTables::Success(_) | GetPopularTables::Failure)
            )
        })
        .await?;
    if matches!(done, Action::GetPopularTables(GetPopularTables::Failure)) {
        bail!("failed to fetch popular tables");
    }
    let state = session.state();
    render::popular_tables(&state.popular_tables.popular_tables, args.json)
}

pub(crate) async fn run_search(session: &mut Session, args: SearchArgs) -> Result<String> {
    let use_filters = !args.filters.is_empty();
    if use_filters {
        let filters: ResourceFilters = args.filters.into_iter().collect();
        let mut all = FilterReducerState::new();
        all.insert(args.resource, filters);
        session.dispatch(update_search_state(UpdateSearchStateRequest {
            filters: Some(all),
            resource: Some(args.resource),
            ..Default::default()
        }));
    }

    let request = search_all(
        SearchType::SubmitTerm,
        args.term.clone(),
        args.resource,
        args.page,
        use_filters,
    );
    let done = session
        .run_until(request, |action| {
            matches!(
                action,
                Action::SearchAll(SearchAll::Success(_) | SearchAll::Failure)
            )
        })
        .await?;
    if matches!(done, Action::SearchAll(SearchAll::Failure)) {
        bail!("search for `{}` failed", args.term);
    }
    let state = session.state();
    render::search_results(&state.search, args.json)
}

pub(crate) async fn run_inline(session: &mut Session, args: InlineArgs) -> Result<String> {
    let done = session
        .run_until(get_inline_results(args.term.clone()), |action| {
            matches!(
                action,
                Action::InlineSearch(InlineSearch::Success(_) | InlineSearch::Failure)
            )
        })
        .await?;
    if matches!(done, Action::InlineSearch(InlineSearch::Failure)) {
        bail!("inline search for `{}` failed", args.term);
    }
    let state = session.state();
    render::inline_results(&args.term, &state.search.inline_results, args.json)
}
