//! # Run Configuration
//!
//! The three tunables of an orchestration run, constructed once and threaded
//! as an explicit parameter through orchestrator → phase runner → retry
//! executor. No component reads ambient or global state.

use std::num::NonZeroU32;
use std::time::Duration;

/// Immutable configuration for one orchestration run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Maximum invocation attempts per module per phase. At least 1; a budget
    /// of 1 means a single try with no retry.
    pub max_attempts: NonZeroU32,

    /// Suspension between a failed attempt and the next. Zero means no
    /// suspension, only attempt sequencing.
    pub retry_delay: Duration,

    /// When set, per-attempt diagnostics include hook return values.
    pub debug: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_attempts: NonZeroU32::new(3).expect("3 is non-zero"),
            retry_delay: Duration::from_secs(1),
            debug: false,
        }
    }
}

impl RunConfig {
    /// Convenience constructor for tests and simple hosts.
    pub fn new(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts: NonZeroU32::new(max_attempts.max(1)).expect("clamped to at least 1"),
            retry_delay,
            debug: false,
        }
    }
}
