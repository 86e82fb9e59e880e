//! Debounced incremental search box.
//!
//! Keystrokes go through [`SearchWidget::on_input`]. Short inputs clear the
//! display right away; anything longer is searched once the input has been
//! quiet for the configured delay. Searches already sent are never recalled,
//! so a slow response can still land after a newer one.

use std::borrow::Cow;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::client::SearchClient;
use crate::config::WidgetConfig;
use crate::debounce::Debouncer;
use crate::display::Display;
use crate::query::is_searchable;
use crate::render::render;
use crate::search::{search, SearchOutcome};

pub struct SearchWidget {
    config: Arc<WidgetConfig>,
    client: SearchClient,
    display: Arc<dyn Display>,
    debouncer: Debouncer,
}

impl SearchWidget {
    pub fn new(config: WidgetConfig, client: SearchClient, display: Arc<dyn Display>) -> Self {
        let timeout = config.request_timeout.or(client.req_timeout);
        Self {
            debouncer: Debouncer::new(config.debounce),
            client: client.with_timeout(timeout),
            config: Arc::new(config),
            display,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Handle the new value of the text input.
    pub fn on_input(&self, raw: &str) {
        if !is_searchable(raw, self.config.min_query_length) {
            debug!(target: "typeahead::widget", "input below threshold; clearing");
            self.reset();
            return;
        }

        let query = raw.to_string();
        let client = self.client.clone();
        let config = self.config.clone();
        let display = self.display.clone();
        self.debouncer.schedule(async move {
            info!(target: "typeahead::widget", query = %query, "searching");
            let outcome = search(&client, &config.endpoint, &query).await;
            display.show(&render(&outcome, &config));
        });
        debug!(
            target: "typeahead::widget",
            delay_ms = self.debouncer.delay().as_millis() as u64,
            "search scheduled"
        );
    }

    /// Clear results, status and error styling, and drop any scheduled search.
    pub fn reset(&self) {
        if self.debouncer.cancel() {
            debug!(target: "typeahead::widget", "pending search canceled");
        }
        self.display.clear();
    }

    /// Search right away, bypassing the debounce timer and the length check.
    pub async fn search(&self, raw: &str) -> SearchOutcome {
        search(&self.client, &self.config.endpoint, raw).await
    }

    pub fn render(&self, outcome: &SearchOutcome) {
        self.display.show(&render(outcome, &self.config));
    }

    /// Treat every line of `input` as the new value of the text input until
    /// EOF. Invalid UTF-8 is replaced rather than ending the stream. Returns
    /// the number of lines consumed.
    pub async fn feed<R>(&self, mut input: R) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut buf = Vec::new();
        let mut lines = 0;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                return Ok(lines);
            }
            lines += 1;
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                warn!(target: "typeahead::widget", "input line is not valid utf-8; replacing");
            }
            self.on_input(&line);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Wait until the scheduled search, if any, has been fetched and rendered.
    pub async fn settle(&self) {
        self.debouncer.settle().await;
    }
}
