use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Installs the global subscriber. Logs are JSON lines on stderr so they never
/// interleave with what the terminal front end prints on stdout.
/// `RUST_LOG` overrides `default_directive`.
pub fn config_telemetry(service_name: &'static str, default_directive: &str) -> anyhow::Result<()> {
    // Needed to forward ordinary log statements to our tracing subscriber.
    tracing_log::LogTracer::init().context("Failed to initialize log tracer")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .context("Failed to build log filter")?;

    let subscriber = Registry::default().with(filter).with(
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_thread_names(true)
            .with_writer(std::io::stderr),
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install `tracing` subscriber")?;

    tracing::debug!(service_name, "telemetry configured");
    Ok(())
}
