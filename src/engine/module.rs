//! # Module Contract
//!
//! The [`Module`] trait is the contract between the engine and the components
//! it drives. A module is a long-lived, stateful object that participates in
//! zero or more lifecycle phases.
//!
//! # Architecture Note
//! The original host environments this engine targets discover components
//! dynamically, so "does this module implement phase X" cannot be a
//! compile-time fact. The trait formalizes that duck-typed check as an
//! explicit capability query: the engine asks [`Module::capability`] once per
//! phase *before* invoking anything, and [`Capability`] distinguishes a phase
//! that is simply absent (a normal skip) from one that is declared but not
//! actually invocable (a configuration defect in the module).
//!
//! # Error Granularity
//! Modules signal failure with a boxed error ([`ModuleError`]) rather than a
//! crate-wide enum. The engine never inspects the error beyond displaying it:
//! a failed attempt is retried, an exhausted budget becomes an outcome value.
//! This keeps the contract open to any module error type without forcing every
//! module into one taxonomy.

use async_trait::async_trait;

use super::phase::PhaseId;

/// Error type modules use to signal a failed phase invocation.
pub type ModuleError = Box<dyn std::error::Error + Send + Sync>;

/// Result of one phase invocation: an optional detail string on success.
///
/// The detail (if any) is carried into the `Succeeded` outcome and surfaced in
/// logs and run summaries.
pub type InvokeResult = Result<Option<String>, ModuleError>;

/// How a module responds to a named phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    /// The module implements this phase and may be invoked.
    Supported,
    /// The module does not participate in this phase. A normal skip, not an
    /// error.
    Unsupported,
    /// The module declares this phase but the slot is not invocable (wrong
    /// shape). Fatal for this module's phase: recorded and warned, never
    /// retried.
    Malformed {
        /// What is wrong with the capability slot.
        reason: String,
    },
}

/// A resolved, long-lived component driven through lifecycle phases.
///
/// The same instance is reused for every phase of a run, so state written
/// during `Setup` is visible in `Start`. Implementations do not need to be
/// thread-safe beyond `Send`: the engine serializes access.
#[async_trait]
pub trait Module: Send {
    /// Capability query for one phase. Called before any invocation of that
    /// phase; must be cheap and side-effect free.
    fn capability(&self, phase: &PhaseId) -> Capability;

    /// Runs one attempt of the given phase.
    ///
    /// Only called for phases reported [`Capability::Supported`]. May be
    /// called multiple times for the same phase when earlier attempts fail.
    async fn invoke(&mut self, phase: &PhaseId) -> InvokeResult;
}
