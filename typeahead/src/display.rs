use std::sync::Mutex;

use console::{style, Term};

use crate::render::{Style, View};

/// Where the widget puts its results: the results container, the status
/// container and the normal/error style toggle.
pub trait Display: Send + Sync + 'static {
    fn show(&self, view: &View);

    fn clear(&self) {
        self.show(&View::cleared());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlState {
    pub results_html: String,
    pub status_html: String,
    pub style: Style,
    pub updates: usize,
}

/// In-memory containers holding HTML fragments, the way a page would.
#[derive(Debug, Default)]
pub struct HtmlDisplay {
    state: Mutex<HtmlState>,
}

impl HtmlDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> HtmlState {
        self.lock().clone()
    }

    pub fn results_html(&self) -> String {
        self.lock().results_html.clone()
    }

    pub fn status_html(&self) -> String {
        self.lock().status_html.clone()
    }

    pub fn style(&self) -> Style {
        self.lock().style
    }

    /// Number of `show` calls so far, clears included.
    pub fn updates(&self) -> usize {
        self.lock().updates
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HtmlState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Display for HtmlDisplay {
    fn show(&self, view: &View) {
        let results_html = results_html(view);
        let status_html = escape_html(&view.status);
        let mut st = self.lock();
        st.results_html = results_html;
        st.status_html = status_html;
        st.style = view.style;
        st.updates += 1;
    }
}

pub fn results_html(view: &View) -> String {
    if let Some(dump) = &view.diagnostics {
        return format!("<pre>{}</pre>", escape_html(dump));
    }
    let mut out = String::new();
    for title in &view.titles {
        out.push_str("<div>");
        out.push_str(&escape_html(title));
        out.push_str("</div>");
    }
    if let Some(n) = view.found {
        out.push_str(&format!("<br><div class=\"found-count\">Found: {n}</div>"));
    }
    out
}

pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect::<String>()
}

/// Line-oriented terminal output. A cleared view prints nothing.
pub struct TerminalDisplay {
    term: Term,
}

impl TerminalDisplay {
    pub fn stdout() -> Self {
        Self { term: Term::stdout() }
    }

    fn write_view(&self, view: &View) -> std::io::Result<()> {
        for line in terminal_lines(view) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }
}

/// Lines `TerminalDisplay` prints for `view`, styled for the terminal and
/// ending with a blank separator.
pub fn terminal_lines(view: &View) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(dump) = &view.diagnostics {
        lines.extend(dump.lines().map(|l| style(l).red().to_string()));
    }
    lines.extend(view.titles.iter().map(|t| format!("  {t}")));
    if let Some(n) = view.found {
        lines.push(style(format!("Found: {n}")).dim().to_string());
    }
    if !view.status.is_empty() {
        lines.push(match view.style {
            Style::Error => style(&view.status).red().bold().to_string(),
            Style::Normal => view.status.clone(),
        });
    }
    lines.push(String::new());
    lines
}

impl Display for TerminalDisplay {
    fn show(&self, view: &View) {
        if view.is_cleared() {
            return;
        }
        if let Err(e) = self.write_view(view) {
            tracing::warn!(target: "typeahead::display", "terminal write failed: {e}");
        }
    }
}
