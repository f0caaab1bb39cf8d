//! # Orchestrator
//!
//! Runs the configured, ordered list of phases over a discovered module set
//! and aggregates the per-phase summaries into a [`RunSummary`].
//!
//! # Architecture Note
//! The phase barrier is a first-class invariant here, not an accident of loop
//! order: a pass over phase N (including every retry and skip) fully
//! completes before the pass over phase N+1 begins. Later phases may
//! therefore assume earlier phases are done for *every* module, without
//! per-module dependency declarations. In the serial design the barrier is
//! enforced by construction, because each pass is a single awaited call.

use std::sync::Arc;
use tracing::{info, warn};

use super::cancel::Cancellation;
use super::config::RunConfig;
use super::phase::{self, PhaseId};
use super::registry::{ModuleRegistry, ModuleResolver};
use super::report::RunSummary;
use super::runner::PhaseRunner;
use crate::discovery::ModuleHandle;

/// Drives discovered modules through an ordered sequence of lifecycle phases.
///
/// Construction fixes the resolver, phase sequence, and configuration; each
/// [`run`](Orchestrator::run) builds its own registry and summaries, so
/// nothing persists across runs.
pub struct Orchestrator {
    resolver: Arc<dyn ModuleResolver>,
    phases: Vec<PhaseId>,
    config: RunConfig,
}

impl Orchestrator {
    /// Creates an orchestrator with the standard `[Setup, Start]` sequence
    /// and default configuration.
    pub fn new(resolver: Arc<dyn ModuleResolver>) -> Self {
        Self {
            resolver,
            phases: phase::standard_sequence(),
            config: RunConfig::default(),
        }
    }

    /// Replaces the phase sequence. The list is executed strictly in order.
    pub fn with_phases(mut self, phases: Vec<PhaseId>) -> Self {
        self.phases = phases;
        self
    }

    /// Replaces the run configuration.
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs all phases over `handles` without a cancellation path.
    pub async fn run(&self, handles: Vec<ModuleHandle>) -> RunSummary {
        self.run_cancellable(handles, Cancellation::inert()).await
    }

    /// Runs all phases over `handles`, winding down early (between modules
    /// and between retry attempts) if `cancel` is raised.
    ///
    /// The run itself never aborts on module failure: every phase pass visits
    /// every module, and failures surface only in the summary and the log.
    pub async fn run_cancellable(
        &self,
        handles: Vec<ModuleHandle>,
        cancel: Cancellation,
    ) -> RunSummary {
        let handles = dedupe(handles);
        info!(
            modules = handles.len(),
            phases = self.phases.len(),
            "Orchestration run starting"
        );

        let registry = ModuleRegistry::new(Arc::clone(&self.resolver));
        let runner = PhaseRunner::new(&registry, &self.config, &cancel);

        let mut phases = Vec::with_capacity(self.phases.len());
        for phase in &self.phases {
            // Barrier: the awaited pass is terminal for every module before
            // the next phase is offered to any of them.
            phases.push(runner.run_phase(phase, &handles).await);

            if cancel.is_cancelled() {
                break;
            }
        }

        let summary = RunSummary {
            phases,
            cancelled: cancel.is_cancelled(),
        };
        info!(
            succeeded = summary.total_succeeded(),
            skipped = summary.total_skipped(),
            failed = summary.total_failed(),
            cancelled = summary.cancelled,
            "Orchestration run complete"
        );
        summary
    }
}

/// Handle identity must be unique within a discovery pass; later duplicates
/// are dropped so one instance cannot be driven twice per phase.
fn dedupe(handles: Vec<ModuleHandle>) -> Vec<ModuleHandle> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::with_capacity(handles.len());
    for handle in handles {
        if seen.insert(handle.name().to_string()) {
            unique.push(handle);
        } else {
            warn!(module = handle.name(), "Duplicate module handle dropped");
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let handles = vec![
            ModuleHandle::catalog("a"),
            ModuleHandle::catalog("b"),
            ModuleHandle::catalog("a"),
        ];
        let unique = dedupe(handles);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].name(), "a");
        assert_eq!(unique[1].name(), "b");
    }
}
