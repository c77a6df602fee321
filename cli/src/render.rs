use std::fmt::Write as _;

use anyhow::Result;
use catalog_core::search::InlineResultsState;
use catalog_core::search::SearchReducerState;
use catalog_protocol::DashboardResource;
use catalog_protocol::FeatureResource;
use catalog_protocol::ResourceType;
use catalog_protocol::SearchResults;
use catalog_protocol::TableResource;
use catalog_protocol::UserResource;
use serde::Serialize;
use strum::IntoEnumIterator;

/// JSON shape shared by full and inline results.
#[derive(Serialize)]
struct ResultsOutput<'a> {
    search_term: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<ResourceType>,
    tables: &'a SearchResults<TableResource>,
    users: &'a SearchResults<UserResource>,
    dashboards: &'a SearchResults<DashboardResource>,
    features: &'a SearchResults<FeatureResource>,
}

pub(crate) fn popular_tables(tables: &[TableResource], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(tables)?);
    }
    if tables.is_empty() {
        return Ok("No popular tables.".to_string());
    }
    let mut out = String::new();
    for table in tables {
        let _ = writeln!(out, "{}", table_line(table));
    }
    Ok(out.trim_end().to_string())
}

pub(crate) fn search_results(state: &SearchReducerState, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&ResultsOutput {
            search_term: &state.search_term,
            resource: Some(state.resource),
            tables: &state.tables,
            users: &state.users,
            dashboards: &state.dashboards,
            features: &state.features,
        })?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Results for \"{}\"", state.search_term);
    for resource in ResourceType::iter() {
        let _ = writeln!(
            out,
            "  {:<12}{}",
            resource.bucket_name(),
            state.total_results(resource)
        );
    }
    let _ = writeln!(
        out,
        "\n{} (page {}):",
        state.resource.bucket_name(),
        state.page_index(state.resource)
    );
    let lines: Vec<String> = match state.resource {
        ResourceType::Table => state.tables.results.iter().map(table_line).collect(),
        ResourceType::User => state.users.results.iter().map(user_line).collect(),
        ResourceType::Dashboard => state.dashboards.results.iter().map(dashboard_line).collect(),
        ResourceType::Feature => state.features.results.iter().map(feature_line).collect(),
    };
    push_lines(&mut out, lines);
    Ok(out.trim_end().to_string())
}

pub(crate) fn inline_results(
    term: &str,
    inline: &InlineResultsState,
    json: bool,
) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&ResultsOutput {
            search_term: term,
            resource: None,
            tables: &inline.tables,
            users: &inline.users,
            dashboards: &inline.dashboards,
            features: &inline.features,
        })?);
    }

    let mut out = String::new();
    let sections: [(&str, Vec<String>); 4] = [
        ("tables", inline.tables.results.iter().map(table_line).collect()),
        ("users", inline.users.results.iter().map(user_line).collect()),
        (
            "dashboards",
            inline.dashboards.results.iter().map(dashboard_line).collect(),
        ),
        (
            "features",
            inline.features.results.iter().map(feature_line).collect(),
        ),
    ];
    for (name, lines) in sections {
        if lines.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{name}:");
        push_lines(&mut out, lines);
    }
    if out.is_empty() {
        return Ok(format!("No suggestions for \"{term}\"."));
    }
    Ok(out.trim_end().to_string())
}

fn push_lines(out: &mut String, lines: Vec<String>) {
    if lines.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for line in lines {
        let _ = writeln!(out, "  {line}");
    }
}

fn table_line(table: &TableResource) -> String {
    if table.description.is_empty() {
        table.qualified_name()
    } else {
        format!("{}  {}", table.qualified_name(), table.description)
    }
}

fn user_line(user: &UserResource) -> String {
    format!("{} <{}>", user.display_name, user.email)
}

fn dashboard_line(dashboard: &DashboardResource) -> String {
    format!(
        "{}/{} ({})",
        dashboard.group_name, dashboard.name, dashboard.product
    )
}

fn feature_line(feature: &FeatureResource) -> String {
    format!(
        "{}.{} v{}",
        feature.feature_group, feature.name, feature.version
    )
}
