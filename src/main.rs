use anyhow::{Context, Result};
use std::env;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};
use waterdash::{config, Dashboard, Selection, Session};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) resolve session tables ───────────────────────────────────
    let cfg = config::root_from_env();
    let session = Session::new(cfg);
    let store = session.tables().context("loading water tables")?;
    if store.source().is_fallback() {
        warn!(
            "no source tables found; showing placeholder data written to {}",
            session.config().primary_dir().display()
        );
    }

    // ─── 3) build the snapshot for the requested selection ────────────
    let selection = Selection::from_env().context("reading selection from environment")?;
    let dashboard = Dashboard::build(&store, &selection)?;
    if dashboard.sectors.is_none() {
        info!("no data for selection");
    }

    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
