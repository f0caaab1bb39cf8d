//! # Engine Errors
//!
//! Error types owned by the engine itself. Module-signaled failures use the
//! boxed [`ModuleError`](super::module::ModuleError) alias instead. Nothing in
//! this module ever propagates past the phase runner as an unhandled fault:
//! every error here is converted into an outcome value at the layer that
//! observes it.

use thiserror::Error;

/// Errors produced while turning a discovered handle into a module instance.
///
/// Cloneable so a failure can be cached for the rest of the run: a handle that
/// fails to resolve is excluded from all later phases without re-running the
/// resolver.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    /// The resolver does not recognize the handle's source.
    #[error("unknown module source for '{0}'")]
    UnknownSource(String),

    /// Instantiation ran and failed (e.g. the underlying source is malformed).
    #[error("module '{name}' failed to instantiate: {reason}")]
    Instantiation { name: String, reason: String },

    /// A previous resolution of this handle failed during this run; the
    /// resolver was not run again.
    #[error("module '{name}' previously failed to resolve: {reason}")]
    PreviouslyFailed { name: String, reason: String },
}

impl ResolveError {
    /// The recorded form of this error for cache entries: later resolves of
    /// the same handle report `PreviouslyFailed` carrying the original reason.
    pub(crate) fn as_cached(&self, name: &str) -> ResolveError {
        let reason = match self {
            ResolveError::UnknownSource(_) => "unknown module source".to_string(),
            ResolveError::Instantiation { reason, .. }
            | ResolveError::PreviouslyFailed { reason, .. } => reason.clone(),
        };
        ResolveError::PreviouslyFailed {
            name: name.to_string(),
            reason,
        }
    }
}
