//! # Module Host Demo
//!
//! Wires the shipped modules into a [`StaticCatalog`], runs the standard
//! `Setup` → `Start` sequence, and reports the per-phase outcomes.
//!
//! ```bash
//! # Run with info logs
//! cargo run
//!
//! # Show per-attempt retry diagnostics
//! RUST_LOG=debug cargo run
//! ```

use module_host::discovery::{Discovery, StaticCatalog};
use module_host::engine::{Module, Orchestrator, RunConfig};
use module_host::logging::setup_tracing;
use module_host::modules::{DayNightCycle, Motd};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting module host");

    // Register the shipped modules. A real host would add its own discovery
    // (e.g. DirectoryDiscovery) and resolver on top.
    let mut catalog = StaticCatalog::new();
    catalog.register("day-night", || {
        Ok(Box::new(DayNightCycle::new(24)) as Box<dyn Module>)
    });
    catalog.register("motd", || {
        Ok(Box::new(Motd::new("Welcome to the module host.")) as Box<dyn Module>)
    });
    let catalog = Arc::new(catalog);

    let orchestrator = Orchestrator::new(catalog.clone()).with_config(RunConfig {
        retry_delay: Duration::from_millis(250),
        ..RunConfig::default()
    });

    let handles = catalog.list_candidates().await;
    let summary = orchestrator.run(handles).await;

    for phase in &summary.phases {
        info!(
            phase = %phase.phase,
            succeeded = phase.succeeded(),
            skipped = phase.skipped(),
            failed = phase.failed(),
            "Phase result"
        );
    }
    info!(failures = summary.total_failed(), "Module host is up");
}
