//! # Observability & Tracing
//!
//! Structured logging for the whole host, built on the `tracing` crate.
//!
//! Every event the engine emits carries its context as explicit structured
//! fields (`module`, `phase`, `attempt`) supplied by the caller; nothing is
//! inferred from the call stack. The compact format hides the crate/module
//! prefix (`with_target(false)`) to keep log lines short while retaining the
//! structured data.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default level: info)
//! cargo run
//!
//! # Per-attempt retry diagnostics
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a run looks like:
//!
//! ```text
//! INFO Orchestration run starting modules=2 phases=2
//! INFO Phase pass starting phase=Setup modules=2
//! WARN Attempt failed, retrying module=day-night phase=Setup attempt=1 budget=3 error=...
//! INFO Phase pass complete phase=Setup succeeded=2 skipped=0 failed=0
//! ```

/// Initializes the global tracing subscriber. Call once at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false) // Don't show module paths - events carry their own context
        .compact()
        .init();
}
