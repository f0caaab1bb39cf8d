//! # Module Host
//!
//! > **A lifecycle orchestration engine for dynamically discovered modules.**
//!
//! This crate drives an arbitrary, heterogeneous set of components
//! ("modules") through an ordered sequence of initialization phases
//! (`Setup`, then `Start` by default) while keeping one misbehaving module
//! from halting or corrupting the startup of the rest.
//!
//! ## 🚀 Core Concepts
//!
//! ### Phase Barrier
//! Every module finishes phase N (success, skip, or exhausted retries) before
//! any module begins phase N+1. Later phases can therefore assume earlier
//! phases are done for *every* module, without per-module dependency
//! declarations. Ordering between modules *within* a phase is unspecified and
//! must not be relied upon.
//!
//! ### Bounded Retries
//! A failing phase hook is retried up to a configured attempt budget, with a
//! configured delay between attempts. Exhaustion is an outcome, not a fault:
//! the run always continues with the next module.
//!
//! ### Fault Isolation
//! Every error is converted to an outcome value at the lowest layer that
//! observes it: resolution failures in the registry, invocation failures in
//! the retry executor. Nothing propagates past the phase runner, and the run
//! itself never aborts because one module failed.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`engine`])
//! The orchestration core: the [`Module`](engine::Module) contract with its
//! explicit capability query, the resolve-once
//! [`ModuleRegistry`](engine::ModuleRegistry), the bounded
//! [`retry`](engine::retry) executor, the per-phase
//! [`PhaseRunner`](engine::PhaseRunner), and the
//! [`Orchestrator`](engine::Orchestrator) that enforces the barrier.
//!
//! ### 2. Discovery ([`discovery`])
//! Where modules come from: a [`Discovery`](discovery::Discovery)
//! collaborator enumerates candidate handles, a
//! [`ModuleResolver`](engine::ModuleResolver) instantiates them. Ships with a
//! [`StaticCatalog`](discovery::StaticCatalog) of named factories and a
//! filesystem [`DirectoryDiscovery`](discovery::DirectoryDiscovery).
//!
//! ### 3. Shipped Modules ([`modules`])
//! Working examples of the contract: a stateful day/night clock and a
//! message-of-the-day banner.
//!
//! ## 📚 Quick Start
//!
//! ```rust,no_run
//! use module_host::discovery::{Discovery, StaticCatalog};
//! use module_host::engine::{Module, Orchestrator};
//! use module_host::modules::{DayNightCycle, Motd};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut catalog = StaticCatalog::new();
//!     catalog.register("day-night", || Ok(Box::new(DayNightCycle::new(24)) as Box<dyn Module>));
//!     catalog.register("motd", || Ok(Box::new(Motd::new("welcome")) as Box<dyn Module>));
//!     let catalog = Arc::new(catalog);
//!
//!     let orchestrator = Orchestrator::new(catalog.clone());
//!     let summary = orchestrator.run(catalog.list_candidates().await).await;
//!     assert_eq!(summary.total_failed(), 0);
//! }
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`engine::mock`] for a scripted module implementation that makes
//! retry, skip, and barrier behavior deterministic to test.

pub mod discovery;
pub mod engine;
pub mod logging;
pub mod modules;

pub use discovery::{DirectoryDiscovery, Discovery, ModuleHandle, StaticCatalog};
pub use engine::{
    Capability, Module, ModuleOutcome, Orchestrator, PhaseId, RunConfig, RunSummary,
};
