//! Command-line driver for the clipping flow.
//!
//! Usage: `clipiq <youtube-url> [long|short]`
//!
//! Runs one full session against the configured backend: fetch metadata,
//! trigger ingestion, submit a generation request, then walk the SEO facets.

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clipiq_client::{ApiClient, ClientConfig};
use clipiq_models::{OptimizationProfile, SeoFacet};
use clipiq_session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON when requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive("clipiq=info".parse()?);

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let mut args = std::env::args().skip(1);
    let url = match args.next() {
        Some(url) => url,
        None => {
            eprintln!("usage: clipiq <youtube-url> [long|short]");
            std::process::exit(2);
        }
    };
    let profile = match args.next().as_deref() {
        None | Some("short") => OptimizationProfile::ShortForm,
        Some("long") => OptimizationProfile::LongForm,
        Some(other) => bail!("unknown profile '{other}', expected 'long' or 'short'"),
    };

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, "starting clipiq");
    // Missing anti-forgery token is fatal here, before any request is made.
    let client = ApiClient::new(config).context("failed to construct API client")?;

    let mut session = Session::new();

    let metadata = session
        .fetch_source(&client, &url)
        .await
        .context("fetch failed")?;
    println!("Title:     {}", metadata.title);
    println!("Thumbnail: {}", metadata.thumbnail_url);

    session.set_profile(profile);
    let result = session.submit(&client).await.context("generation failed")?;
    println!("{}", result.message);

    let (mut panel, initial) = session.open_seo_panel()?;
    panel.refresh(&client, initial).await;

    for facet in SeoFacet::ALL {
        if panel.text(*facet).is_none() {
            panel.show(&client, *facet).await;
        }
        let text = panel.text(*facet).unwrap_or("");
        println!("\n[{facet}]\n{text}");
    }

    Ok(())
}
