//! Modules shipped with the host, built on the [`Module`](crate::engine::Module) contract.
//!
//! These double as working examples of the contract: a stateful two-phase
//! module ([`DayNightCycle`]) and a minimal single-phase one ([`Motd`]).

pub mod day_night;
pub mod motd;

pub use day_night::{DayNightCycle, DayNightError};
pub use motd::Motd;
