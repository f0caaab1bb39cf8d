//! # Phase Runner
//!
//! One pass over every discovered module for one named phase: resolve through
//! the registry, query the capability, invoke through the bounded-retry
//! executor, record the outcome. Failure of any single module never aborts
//! the pass; every remaining module is always visited.
//!
//! # Architecture Note
//! The pass is serial, and after each module's *full* retry sequence the
//! runner yields back to the scheduler. A very large module set therefore
//! cannot monopolize an execution turn in a cooperative host, even though no
//! two modules ever run concurrently.

use tracing::{debug, info, warn};

use super::cancel::Cancellation;
use super::config::RunConfig;
use super::error::ResolveError;
use super::module::{Capability, Module, ModuleError};
use super::phase::PhaseId;
use super::registry::ModuleRegistry;
use super::report::{ModuleOutcome, PhaseSummary, SkipReason};
use super::retry::{self, ExecutionOutcome, Retryable};
use crate::discovery::ModuleHandle;

/// A phase hook bound to one module instance, ready for the retry executor.
struct PhaseInvocation<'a> {
    module: &'a mut dyn Module,
    phase: &'a PhaseId,
}

#[async_trait::async_trait]
impl Retryable for PhaseInvocation<'_> {
    type Output = Option<String>;

    async fn attempt(&mut self) -> Result<Option<String>, ModuleError> {
        self.module.invoke(self.phase).await
    }
}

/// Drives all modules through a single phase.
pub struct PhaseRunner<'a> {
    registry: &'a ModuleRegistry,
    config: &'a RunConfig,
    cancel: &'a Cancellation,
}

impl<'a> PhaseRunner<'a> {
    pub fn new(
        registry: &'a ModuleRegistry,
        config: &'a RunConfig,
        cancel: &'a Cancellation,
    ) -> Self {
        Self {
            registry,
            config,
            cancel,
        }
    }

    /// Runs one pass of `phase` over `handles`, in pass order.
    ///
    /// Returns only when every module's outcome for this phase is terminal;
    /// the caller relies on that for the phase barrier.
    pub async fn run_phase(&self, phase: &PhaseId, handles: &[ModuleHandle]) -> PhaseSummary {
        info!(phase = %phase, modules = handles.len(), "Phase pass starting");
        let mut summary = PhaseSummary::new(phase.clone());

        for (visited, handle) in handles.iter().enumerate() {
            if self.cancel.is_cancelled() {
                info!(phase = %phase, remaining = handles.len() - visited, "Pass cancelled");
                for rest in &handles[visited..] {
                    summary.record(rest.name(), ModuleOutcome::Cancelled);
                }
                break;
            }

            let outcome = self.run_module(phase, handle).await;
            summary.record(handle.name(), outcome);

            // Cooperative point: give the scheduler a turn after each
            // module's full retry sequence.
            tokio::task::yield_now().await;
        }

        info!(
            phase = %phase,
            succeeded = summary.succeeded(),
            skipped = summary.skipped(),
            failed = summary.failed(),
            "Phase pass complete"
        );
        summary
    }

    async fn run_module(&self, phase: &PhaseId, handle: &ModuleHandle) -> ModuleOutcome {
        let shared = match self.registry.resolve(handle).await {
            Ok(module) => module,
            Err(error @ ResolveError::PreviouslyFailed { .. }) => {
                // Already warned when the resolution first failed.
                debug!(module = handle.name(), phase = %phase, error = %error, "Skipping unresolved module");
                return ModuleOutcome::Failed {
                    error: error.to_string(),
                    attempts: 0,
                };
            }
            Err(error) => {
                warn!(module = handle.name(), phase = %phase, error = %error, "Resolution failed");
                return ModuleOutcome::Failed {
                    error: error.to_string(),
                    attempts: 0,
                };
            }
        };

        let mut instance = shared.lock().await;
        match instance.capability(phase) {
            Capability::Unsupported => {
                debug!(module = handle.name(), phase = %phase, "Phase not implemented, skipping");
                ModuleOutcome::Skipped {
                    reason: SkipReason::Unsupported,
                }
            }
            Capability::Malformed { reason } => {
                warn!(module = handle.name(), phase = %phase, reason = %reason, "Malformed capability, skipping");
                ModuleOutcome::Skipped {
                    reason: SkipReason::MalformedCapability { reason },
                }
            }
            Capability::Supported => {
                let mut invocation = PhaseInvocation {
                    module: &mut **instance,
                    phase,
                };
                match retry::run(
                    &mut invocation,
                    self.config,
                    self.cancel,
                    handle.name(),
                    phase,
                )
                .await
                {
                    ExecutionOutcome::Succeeded { value, attempts } => {
                        if self.config.debug {
                            debug!(module = handle.name(), phase = %phase, attempts, value = ?value, "Phase hook returned");
                        }
                        ModuleOutcome::Succeeded { value, attempts }
                    }
                    ExecutionOutcome::Failed { error, attempts } => {
                        warn!(
                            module = handle.name(),
                            phase = %phase,
                            attempts,
                            error = %error,
                            "Retries exhausted"
                        );
                        ModuleOutcome::Failed {
                            error: error.to_string(),
                            attempts,
                        }
                    }
                    ExecutionOutcome::Cancelled { .. } => ModuleOutcome::Cancelled,
                }
            }
        }
    }
}
