//! Self-contained HTML page around the d3 force-graph viewer.
//!
//! The template lives in `assets/graph.html` and is embedded at compile time. It
//! carries four placeholders which are substituted in a single pass, so text
//! substituted for one placeholder is never scanned for another.
use crate::core::config::PageConfig;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::OnceLock;
use stepgraph_types::GraphPayload;

const PAGE_TEMPLATE: &str = include_str!("../../../assets/graph.html");

const PLACEHOLDERS: [&str; 4] = ["TITLE", "WIDTH", "HEIGHT", "GRAPH_DATA"];

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to encode graph payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("page template is missing the __{0}__ placeholder")]
    MissingPlaceholder(&'static str),
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"__(TITLE|WIDTH|HEIGHT|GRAPH_DATA)__").expect("placeholder pattern is valid")
    })
}

/// Render the bundled page for `payload`.
pub fn render_page(payload: &GraphPayload, page: &PageConfig) -> Result<String, RenderError> {
    render_template(PAGE_TEMPLATE, payload, page)
}

/// Render an arbitrary template carrying the `__TITLE__`, `__WIDTH__`, `__HEIGHT__`
/// and `__GRAPH_DATA__` placeholders.
pub fn render_template(
    template: &str,
    payload: &GraphPayload,
    page: &PageConfig,
) -> Result<String, RenderError> {
    let pattern = placeholder_pattern();
    let present: BTreeSet<&str> = pattern
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();
    if let Some(missing) = PLACEHOLDERS.iter().find(|name| !present.contains(*name)) {
        return Err(RenderError::MissingPlaceholder(*missing));
    }

    let data = script_safe_json(payload)?;
    let title = escape_html(&page.title);
    let width = page.width.to_string();
    let height = page.height.to_string();

    let rendered = pattern.replace_all(template, |caps: &Captures| match &caps[1] {
        "TITLE" => title.clone(),
        "WIDTH" => width.clone(),
        "HEIGHT" => height.clone(),
        _ => data.clone(),
    });
    Ok(rendered.into_owned())
}

/// JSON that can sit inside a `<script>` element: `<` only occurs inside JSON
/// strings, where `\u003c` is an equivalent escape.
pub fn script_safe_json(payload: &GraphPayload) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(payload)?.replace('<', "\\u003c"))
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
