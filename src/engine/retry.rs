//! # Bounded-Retry Executor
//!
//! Runs a single operation with a bounded attempt budget and an inter-attempt
//! delay, reporting success or terminal failure as a *value*. Nothing here
//! raises: the caller owns fault isolation, so an exhausted budget comes back
//! as [`ExecutionOutcome::Failed`] instead of a propagated error.
//!
//! # Architecture Note
//! The sleep between attempts is the only blocking point in the whole engine,
//! and it is scoped to the single module/phase pair being retried. The
//! cancellation signal is checked before every attempt, never during one: an
//! in-flight invocation always runs to completion.

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::cancel::Cancellation;
use super::config::RunConfig;
use super::module::ModuleError;
use super::phase::PhaseId;

/// One retryable operation. Implementations keep whatever state they need
/// across attempts; the executor calls [`attempt`](Retryable::attempt)
/// repeatedly until it succeeds or the budget runs out.
#[async_trait]
pub trait Retryable: Send {
    /// Value produced by a successful attempt.
    type Output: Send;

    /// Runs one attempt.
    async fn attempt(&mut self) -> Result<Self::Output, ModuleError>;
}

/// Terminal result of a retry sequence.
#[derive(Debug)]
pub enum ExecutionOutcome<T> {
    /// An attempt completed without error; no further attempts were made.
    Succeeded { value: T, attempts: u32 },
    /// Every attempt in the budget failed; carries the last error.
    Failed { error: ModuleError, attempts: u32 },
    /// Cancellation was observed before an attempt; `attempts` counts the
    /// attempts that had already run.
    Cancelled { attempts: u32 },
}

/// Runs `op` up to `config.max_attempts` times, sleeping `config.retry_delay`
/// between failed attempts.
///
/// `module` and `phase` are logging context only: every event the executor
/// emits names the module, the phase, and the attempt number explicitly.
pub async fn run<O: Retryable>(
    op: &mut O,
    config: &RunConfig,
    cancel: &Cancellation,
    module: &str,
    phase: &PhaseId,
) -> ExecutionOutcome<O::Output> {
    let budget = config.max_attempts.get();
    let mut attempt = 0u32;

    loop {
        if cancel.is_cancelled() {
            debug!(module, phase = %phase, attempts = attempt, "Cancelled before attempt");
            return ExecutionOutcome::Cancelled { attempts: attempt };
        }
        attempt += 1;

        match op.attempt().await {
            Ok(value) => {
                debug!(module, phase = %phase, attempt, "Attempt succeeded");
                return ExecutionOutcome::Succeeded { value, attempts: attempt };
            }
            Err(error) if attempt >= budget => {
                return ExecutionOutcome::Failed {
                    error,
                    attempts: attempt,
                };
            }
            Err(error) => {
                warn!(
                    module,
                    phase = %phase,
                    attempt,
                    budget,
                    error = %error,
                    "Attempt failed, retrying"
                );
                if !config.retry_delay.is_zero() {
                    sleep(config.retry_delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Fails a scripted number of times, then succeeds.
    struct Flaky {
        failures_remaining: u32,
        calls: u32,
    }

    #[async_trait]
    impl Retryable for Flaky {
        type Output = u32;

        async fn attempt(&mut self) -> Result<u32, ModuleError> {
            self.calls += 1;
            if self.failures_remaining > 0 {
                self.failures_remaining -= 1;
                Err(format!("simulated failure #{}", self.calls).into())
            } else {
                Ok(self.calls)
            }
        }
    }

    fn config(max_attempts: u32, delay: Duration) -> RunConfig {
        RunConfig::new(max_attempts, delay)
    }

    #[tokio::test]
    async fn first_attempt_success_stops_immediately() {
        let mut op = Flaky {
            failures_remaining: 0,
            calls: 0,
        };
        let outcome = run(
            &mut op,
            &config(3, Duration::ZERO),
            &Cancellation::inert(),
            "m",
            &crate::engine::phase::SETUP,
        )
        .await;
        match outcome {
            ExecutionOutcome::Succeeded { value, attempts } => {
                assert_eq!(value, 1);
                assert_eq!(attempts, 1);
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(op.calls, 1);
    }

    #[tokio::test]
    async fn succeeds_on_attempt_k_with_exactly_k_invocations() {
        let mut op = Flaky {
            failures_remaining: 2,
            calls: 0,
        };
        let outcome = run(
            &mut op,
            &config(3, Duration::ZERO),
            &Cancellation::inert(),
            "m",
            &crate::engine::phase::SETUP,
        )
        .await;
        match outcome {
            ExecutionOutcome::Succeeded { value, attempts } => {
                assert_eq!(attempts, 3);
                assert_eq!(value, 3); // the third attempt's return value
            }
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(op.calls, 3);
    }

    #[tokio::test]
    async fn exhausted_budget_returns_last_error() {
        let mut op = Flaky {
            failures_remaining: 10,
            calls: 0,
        };
        let outcome = run(
            &mut op,
            &config(3, Duration::ZERO),
            &Cancellation::inert(),
            "m",
            &crate::engine::phase::SETUP,
        )
        .await;
        match outcome {
            ExecutionOutcome::Failed { error, attempts } => {
                assert_eq!(attempts, 3);
                assert_eq!(error.to_string(), "simulated failure #3");
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(op.calls, 3);
    }

    #[tokio::test]
    async fn budget_of_one_means_single_try() {
        let mut op = Flaky {
            failures_remaining: 1,
            calls: 0,
        };
        let outcome = run(
            &mut op,
            &config(1, Duration::from_secs(5)),
            &Cancellation::inert(),
            "m",
            &crate::engine::phase::SETUP,
        )
        .await;
        assert!(matches!(
            outcome,
            ExecutionOutcome::Failed { attempts: 1, .. }
        ));
        assert_eq!(op.calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_applied_between_failed_attempts_only() {
        let started = tokio::time::Instant::now();
        let mut op = Flaky {
            failures_remaining: 2,
            calls: 0,
        };
        let outcome = run(
            &mut op,
            &config(3, Duration::from_secs(1)),
            &Cancellation::inert(),
            "m",
            &crate::engine::phase::SETUP,
        )
        .await;
        assert!(matches!(outcome, ExecutionOutcome::Succeeded { .. }));
        // Two failures -> two sleeps; no sleep after the final success.
        assert_eq!(started.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn cancellation_is_observed_before_the_next_attempt() {
        let (handle, signal) = crate::engine::cancel::CancelHandle::new();
        handle.cancel();
        let mut op = Flaky {
            failures_remaining: 0,
            calls: 0,
        };
        let outcome = run(
            &mut op,
            &config(3, Duration::ZERO),
            &signal,
            "m",
            &crate::engine::phase::SETUP,
        )
        .await;
        assert!(matches!(
            outcome,
            ExecutionOutcome::Cancelled { attempts: 0 }
        ));
        assert_eq!(op.calls, 0);
    }
}
