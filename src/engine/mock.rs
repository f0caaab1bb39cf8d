//! # Mock Module & Testing Guide
//!
//! [`MockModule`] is a scripted [`Module`] implementation for deterministic
//! engine tests. Each phase gets a [`MockBehavior`] describing how invocations
//! should play out; an optional shared journal records every invocation in
//! global order so tests can assert cross-module sequencing (e.g. the phase
//! barrier) without timing tricks.
//!
//! It lives in the library (not behind `#[cfg(test)]`) so integration tests
//! and downstream hosts can use it.
//!
//! ## Typical patterns
//!
//! ```rust
//! use module_host::engine::mock::{MockBehavior, MockModule};
//! use module_host::engine::phase::{SETUP, START};
//!
//! // Succeeds Setup on the third attempt, skips Start entirely.
//! let module = MockModule::new("flaky")
//!     .on(SETUP, MockBehavior::FailTimes { failures: 2, then: None });
//!
//! // Shares one journal across modules to observe global invocation order.
//! let journal = MockModule::journal();
//! let a = MockModule::new("a")
//!     .on(SETUP, MockBehavior::Succeed(None))
//!     .with_journal(&journal);
//! let b = MockModule::new("b")
//!     .on(START, MockBehavior::Succeed(Some("live".into())))
//!     .with_journal(&journal);
//! # let _ = (module, a, b);
//! ```
//!
//! Journal entries have the shape `"<module>:<phase>:<attempt>"`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::module::{Capability, InvokeResult, Module};
use super::phase::PhaseId;

/// Shared, ordered record of invocations across any number of mock modules.
pub type Journal = Arc<Mutex<Vec<String>>>;

/// Scripted behavior of one phase of a [`MockModule`].
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Every attempt succeeds with the given detail.
    Succeed(Option<String>),
    /// The first `failures` attempts fail, then attempts succeed with `then`.
    FailTimes {
        failures: u32,
        then: Option<String>,
    },
    /// Every attempt fails with the given message.
    AlwaysFail(String),
    /// The capability is declared but not invocable; the engine must skip
    /// without a single attempt.
    Malformed(String),
}

/// Scripted module for engine tests. Phases without a scripted behavior are
/// reported [`Capability::Unsupported`].
pub struct MockModule {
    label: String,
    behaviors: HashMap<PhaseId, MockBehavior>,
    attempts: HashMap<PhaseId, u32>,
    journal: Option<Journal>,
}

impl MockModule {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            behaviors: HashMap::new(),
            attempts: HashMap::new(),
            journal: None,
        }
    }

    /// Creates an empty journal to share between modules.
    pub fn journal() -> Journal {
        Arc::new(Mutex::new(Vec::new()))
    }

    /// Scripts `behavior` for `phase`.
    pub fn on(mut self, phase: PhaseId, behavior: MockBehavior) -> Self {
        self.behaviors.insert(phase, behavior);
        self
    }

    /// Attaches a shared journal; every invocation appends
    /// `"<label>:<phase>:<attempt>"`.
    pub fn with_journal(mut self, journal: &Journal) -> Self {
        self.journal = Some(Arc::clone(journal));
        self
    }

    /// Attempts this instance has seen for `phase`.
    pub fn attempts_for(&self, phase: &PhaseId) -> u32 {
        self.attempts.get(phase).copied().unwrap_or(0)
    }
}

#[async_trait]
impl Module for MockModule {
    fn capability(&self, phase: &PhaseId) -> Capability {
        match self.behaviors.get(phase) {
            None => Capability::Unsupported,
            Some(MockBehavior::Malformed(reason)) => Capability::Malformed {
                reason: reason.clone(),
            },
            Some(_) => Capability::Supported,
        }
    }

    async fn invoke(&mut self, phase: &PhaseId) -> InvokeResult {
        let attempt = self.attempts.entry(phase.clone()).or_insert(0);
        *attempt += 1;
        let attempt = *attempt;

        if let Some(journal) = &self.journal {
            let mut entries = journal.lock().unwrap_or_else(|e| e.into_inner());
            entries.push(format!("{}:{}:{}", self.label, phase, attempt));
        }

        match self.behaviors.get(phase) {
            Some(MockBehavior::Succeed(value)) => Ok(value.clone()),
            Some(MockBehavior::FailTimes { failures, then }) => {
                if attempt <= *failures {
                    Err(format!("{} attempt {attempt} failed", self.label).into())
                } else {
                    Ok(then.clone())
                }
            }
            Some(MockBehavior::AlwaysFail(message)) => Err(message.clone().into()),
            // The engine skips malformed/absent capabilities before invoking;
            // reaching here is a harness bug worth failing loudly.
            Some(MockBehavior::Malformed(_)) | None => {
                Err(format!("{}: invoked phase without invocable capability", self.label).into())
            }
        }
    }
}
