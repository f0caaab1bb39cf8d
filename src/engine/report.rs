//! # Run Reports
//!
//! Per-module, per-phase outcomes aggregated into phase and run summaries.
//! These are observational values: the engine produces them for logging and
//! diagnostics, nothing reads them to make control-flow decisions. All types
//! serialize so a host can export a run report as JSON.

use serde::Serialize;

use super::phase::PhaseId;

/// Why a module was skipped for a phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The module does not implement this phase. Normal, not logged as a
    /// failure.
    Unsupported,
    /// The module declares the phase but the capability slot is not invocable.
    /// A configuration defect: warned, zero attempts, never retried.
    MalformedCapability { reason: String },
}

/// Terminal outcome of one module for one phase.
#[derive(Clone, Debug, Serialize)]
pub enum ModuleOutcome {
    /// The phase hook completed; `value` is the hook's return detail and
    /// `attempts` how many invocations it took.
    Succeeded {
        value: Option<String>,
        attempts: u32,
    },
    /// The module did not run this phase.
    Skipped { reason: SkipReason },
    /// Terminal failure: exhausted retry budget (`attempts` > 0) or a handle
    /// that could not be resolved (`attempts` == 0).
    Failed { error: String, attempts: u32 },
    /// Cancellation was observed before this module's phase terminated.
    Cancelled,
}

impl ModuleOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, ModuleOutcome::Succeeded { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ModuleOutcome::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ModuleOutcome::Failed { .. })
    }

    /// Attempts recorded for this outcome; zero for skips and cancellations.
    pub fn attempts(&self) -> u32 {
        match self {
            ModuleOutcome::Succeeded { attempts, .. } | ModuleOutcome::Failed { attempts, .. } => {
                *attempts
            }
            ModuleOutcome::Skipped { .. } | ModuleOutcome::Cancelled => 0,
        }
    }
}

/// One module's entry in a phase summary.
#[derive(Clone, Debug, Serialize)]
pub struct ModuleReport {
    pub module: String,
    pub outcome: ModuleOutcome,
}

/// Everything that happened in one phase pass.
#[derive(Clone, Debug, Serialize)]
pub struct PhaseSummary {
    pub phase: PhaseId,
    pub reports: Vec<ModuleReport>,
}

impl PhaseSummary {
    pub(crate) fn new(phase: PhaseId) -> Self {
        Self {
            phase,
            reports: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, module: &str, outcome: ModuleOutcome) {
        self.reports.push(ModuleReport {
            module: module.to_string(),
            outcome,
        });
    }

    /// Outcome recorded for `module` in this phase, if it was visited.
    pub fn outcome_for(&self, module: &str) -> Option<&ModuleOutcome> {
        self.reports
            .iter()
            .find(|r| r.module == module)
            .map(|r| &r.outcome)
    }

    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_succeeded()).count()
    }

    pub fn skipped(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_failed()).count()
    }

    pub fn cancelled(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, ModuleOutcome::Cancelled))
            .count()
    }
}

/// Aggregated result of a whole run. Discarded at the end of the run; no
/// cross-run persistence.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub phases: Vec<PhaseSummary>,
    /// Whether the run was cut short by the cancellation signal. Phases that
    /// never started do not appear in `phases`.
    pub cancelled: bool,
}

impl RunSummary {
    /// Summary of the pass over `phase`, if that pass ran.
    pub fn phase(&self, phase: &PhaseId) -> Option<&PhaseSummary> {
        self.phases.iter().find(|p| &p.phase == phase)
    }

    pub fn total_succeeded(&self) -> usize {
        self.phases.iter().map(PhaseSummary::succeeded).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.phases.iter().map(PhaseSummary::skipped).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.phases.iter().map(PhaseSummary::failed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::phase::SETUP;

    #[test]
    fn counts_partition_the_reports() {
        let mut summary = PhaseSummary::new(SETUP);
        summary.record(
            "a",
            ModuleOutcome::Succeeded {
                value: None,
                attempts: 1,
            },
        );
        summary.record(
            "b",
            ModuleOutcome::Skipped {
                reason: SkipReason::Unsupported,
            },
        );
        summary.record(
            "c",
            ModuleOutcome::Failed {
                error: "boom".into(),
                attempts: 3,
            },
        );

        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.cancelled(), 0);
        assert!(summary.outcome_for("c").is_some_and(ModuleOutcome::is_failed));
        assert_eq!(summary.outcome_for("c").map(ModuleOutcome::attempts), Some(3));
        assert_eq!(summary.outcome_for("b").map(ModuleOutcome::attempts), Some(0));
        assert!(summary.outcome_for("missing").is_none());
    }

    #[test]
    fn summaries_serialize_for_export() {
        let mut summary = PhaseSummary::new(SETUP);
        summary.record(
            "a",
            ModuleOutcome::Succeeded {
                value: Some("ready".into()),
                attempts: 2,
            },
        );
        let run = RunSummary {
            phases: vec![summary],
            cancelled: false,
        };

        let json = serde_json::to_value(&run).expect("serializes");
        assert_eq!(json["phases"][0]["phase"], "Setup");
        assert_eq!(
            json["phases"][0]["reports"][0]["outcome"]["Succeeded"]["attempts"],
            2
        );
    }
}
