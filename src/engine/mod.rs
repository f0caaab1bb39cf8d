//! Generic lifecycle orchestration engine.
//!
//! This module provides the core building blocks for driving a dynamically
//! discovered set of modules through an ordered sequence of initialization
//! phases, with bounded retries and per-module fault isolation.
//!
//! # Main Components
//!
//! - [`Module`] - Contract a component implements to be driven by the engine
//! - [`ModuleRegistry`] - Resolve-once cache from discovered handles to instances
//! - [`retry`] - Bounded-retry executor returning outcomes, never faults
//! - [`PhaseRunner`] - One pass over all modules for one phase
//! - [`Orchestrator`] - Ordered phases with a full barrier between them
//! - [`RunSummary`] - Per-module, per-phase outcomes for diagnostics
//!
//! # Testing
//!
//! See the [`mock`] module for a scripted [`Module`] implementation used by
//! the engine's own tests and available to hosts.

pub mod cancel;
pub mod config;
pub mod error;
pub mod mock;
pub mod module;
pub mod orchestrator;
pub mod phase;
pub mod registry;
pub mod report;
pub mod retry;
pub mod runner;

// Re-export core types for convenience
pub use cancel::{CancelHandle, Cancellation};
pub use config::RunConfig;
pub use error::ResolveError;
pub use module::{Capability, InvokeResult, Module, ModuleError};
pub use orchestrator::Orchestrator;
pub use phase::{standard_sequence, PhaseId, SETUP, START};
pub use registry::{ModuleRegistry, ModuleResolver, SharedModule};
pub use report::{ModuleOutcome, ModuleReport, PhaseSummary, RunSummary, SkipReason};
pub use runner::PhaseRunner;
