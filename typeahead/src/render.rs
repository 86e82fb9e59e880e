use serde::Serialize;
use serde_json::Value;

use crate::config::WidgetConfig;
use crate::search::SearchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Normal,
    Error,
}

/// Everything a display needs for one update. `View::default()` is the
/// cleared state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View {
    pub titles: Vec<String>,
    pub found: Option<u64>,
    pub diagnostics: Option<String>,
    pub status: String,
    pub style: Style,
}

impl View {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

pub const EMPTY_STATUS: &str = "Nothing found";

pub fn render(outcome: &SearchOutcome, cfg: &WidgetConfig) -> View {
    match outcome {
        SearchOutcome::Found(resp) => View {
            titles: resp.titles().map(str::to_string).collect(),
            found: cfg.show_found_count.then_some(resp.num_found),
            ..View::default()
        },
        SearchOutcome::Empty { raw, .. } => View {
            diagnostics: cfg.show_diagnostics.then(|| pretty_json(raw)),
            status: EMPTY_STATUS.to_string(),
            style: Style::Error,
            ..View::default()
        },
        SearchOutcome::Failed(err) => View {
            status: format!("Search service unavailable: {err}"),
            style: Style::Error,
            ..View::default()
        },
    }
}

/// Pretty-print with a three-space indent.
pub fn pretty_json(value: &Value) -> String {
    let mut out = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"   ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8(out).unwrap_or_default(),
        Err(_) => value.to_string(),
    }
}
