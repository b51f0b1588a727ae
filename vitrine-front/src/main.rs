use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_config::FrontConfig;
use vitrine_front::{MuseumApiClient, Showcase, TrackLayout};
use vitrine_model::ExhibitionID;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "vitrine-preview", version)]
#[command(
    about = "Load museum content and run its carousels without a browser"
)]
struct Cli {
    /// Configuration file (TOML or JSON). Overrides environment discovery.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Museum API base URL (overrides config)
    #[arg(long, env = "VITRINE_API_URL")]
    api_url: Option<String>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    viewport: f32,

    /// Rendered card width in pixels
    #[arg(long, default_value_t = 320.0)]
    card_width: f32,

    /// Also show the exhibits of this exhibition
    #[arg(long, value_name = "ID")]
    exhibition: Option<ExhibitionID>,

    /// How long to let the carousels run, e.g. `30s` or `2m`
    #[arg(long, value_parser = humantime::parse_duration, default_value = "12s")]
    run_for: Duration,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => FrontConfig::load_validated_from(path),
        None => FrontConfig::load_validated(),
    }
    .context("front end configuration rejected")?;
    let mut config = loaded.config.clone();
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::try_new(&config.logging.filter)
                .unwrap_or_else(|_| EnvFilter::new("info"))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        source = ?loaded.source,
        api = %config.api.base_url,
        "Configuration loaded"
    );
    loaded.log_warnings();

    let client = MuseumApiClient::new(&config.api)?;
    let layout = TrackLayout {
        card_width: cli.card_width,
        viewport_width: cli.viewport,
    };
    let options = config.carousel.clone();

    let mut showcases = Vec::new();
    showcases.extend(
        Showcase::exhibitions(&client, options.clone(), layout).await,
    );
    showcases.extend(Showcase::news(&client, options.clone(), layout).await);
    if let Some(id) = cli.exhibition.as_ref() {
        showcases
            .extend(Showcase::exhibits(&client, id, options, layout).await);
    }

    for showcase in &showcases {
        if let Some(message) = showcase.empty_message() {
            info!(kind = ?showcase.kind(), "{}", message);
        }
    }

    let deadline = tokio::time::Instant::now() + cli.run_for;
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = tokio::time::sleep_until(deadline) => break,
            _ = ticker.tick() => {
                for showcase in &showcases {
                    log_position(showcase).await;
                }
            }
        }
    }

    for showcase in showcases {
        let kind = showcase.kind();
        let snapshot = showcase
            .shutdown()
            .await
            .context("carousel driver panicked")?;
        info!(
            ?kind,
            index = snapshot.current_index,
            pages = snapshot.page_count,
            "Final position"
        );
    }

    Ok(())
}

async fn log_position(showcase: &Showcase) {
    let Some(snapshot) = showcase.handle().snapshot().await else {
        return;
    };
    let titles: Vec<&str> = showcase
        .visible_cards()
        .await
        .unwrap_or_default()
        .iter()
        .map(|card| card.title.as_str())
        .collect();
    info!(
        kind = ?showcase.kind(),
        page = snapshot.current_index + 1,
        pages = snapshot.page_count,
        auto = snapshot.auto_playing,
        "{}",
        titles.join(" | ")
    );
}
