//! # dockwire
//!
//! Demo wiring docked content widgets through a signal router.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default widgets and a single click on Red
//! dockwire
//!
//! # Run with a custom config
//! DOCKWIRE_CONFIG=/path/to/dockwire.toml dockwire
//!
//! # More detail on wiring
//! RUST_LOG=dockwire=trace dockwire
//! ```

mod app;
mod config;
mod metrics;
mod widget;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load configuration first so it can supply the default log filter
    let config = config::Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting dockwire with {} widgets", config.widgets.len());

    let prometheus = if config.metrics.enabled {
        match metrics::install_recorder() {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("Metrics disabled: {:#}", e);
                None
            }
        }
    } else {
        None
    };
    metrics::init_metrics();

    let app = app::App::build(&config)?;

    for name in &config.clicks {
        app.click(name)?;
    }

    for widget in app.widgets() {
        info!(
            widget = widget.name(),
            caption = widget.caption(),
            content = %widget.content(),
            "Widget content"
        );
    }

    let stats = app.router().stats();
    info!(
        passes = stats.pass_count,
        connections = stats.connection_count,
        "Router summary"
    );

    if let Some(handle) = prometheus {
        info!("Metrics:\n{}", handle.render());
    }

    Ok(())
}
