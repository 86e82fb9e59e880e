use std::sync::Arc;

use anyhow::{Context, Result};
use dotenv::dotenv;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use typeahead::client::SearchClient;
use typeahead::display::TerminalDisplay;
use typeahead::{SearchWidget, WidgetConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    // stdout carries results only; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TYPEAHEAD_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = WidgetConfig::from_env().context("invalid configuration")?;
    tracing::info!("configuration:");
    for (key, value) in config.describe() {
        tracing::info!("  - {key} = {value}");
    }

    let widget = SearchWidget::new(
        config,
        SearchClient::new_tcp(),
        Arc::new(TerminalDisplay::stdout()),
    );

    // One-shot mode: `typeahead star wars`
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let outcome = widget.search(&args.join(" ")).await;
        widget.render(&outcome);
        if outcome.is_failed() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Interactive mode: every line is the new content of the search box.
    widget
        .feed(BufReader::new(tokio::io::stdin()))
        .await
        .context("reading input")?;
    widget.settle().await;
    Ok(())
}
