//! # Lifecycle Phases
//!
//! This module defines the vocabulary of lifecycle phases. A phase is a named
//! step that every module is offered in a fixed global order; the standard
//! sequence is `Setup` followed by `Start`.
//!
//! # Architecture Note
//! The phase sequence is *data*, not a closed enum. The orchestrator accepts
//! any explicit ordered list of [`PhaseId`]s configured once at construction,
//! so a host can insert its own stages (e.g. a `Warmup` between `Setup` and
//! `Start`) without touching the engine. The barrier rule (every module
//! finishes phase N before any module begins phase N+1) applies to whatever
//! sequence was configured.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Identifier of a single lifecycle phase.
///
/// Compared by name; two `PhaseId`s with the same name are the same phase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PhaseId(Cow<'static, str>);

/// The `Setup` phase: modules prepare their own state.
pub const SETUP: PhaseId = PhaseId(Cow::Borrowed("Setup"));

/// The `Start` phase: modules go live, assuming every module's `Setup` is done.
pub const START: PhaseId = PhaseId(Cow::Borrowed("Start"));

impl PhaseId {
    /// Creates a phase identifier with a custom name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The phase name as it appears in logs and summaries.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The standard two-phase sequence: `[Setup, Start]`.
pub fn standard_sequence() -> Vec<PhaseId> {
    vec![SETUP, START]
}
