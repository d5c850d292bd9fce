//! Coarse workflow state driven by classifier verdicts.
//!
//! The classifier only returns values; this tracker is the consumer that
//! remembers the current state and reports when it changes, the way a UI
//! would move between "searching", "pose found" and "power pose" prompts.

use power_pose_core::Verdict;
use serde::Serialize;
use tracing::info;

/// A change of workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// State before the change (`None` for the first observed verdict)
    pub from: Option<Verdict>,
    /// State after the change
    pub to: Verdict,
}

/// Tracks the current verdict and counts what it has seen.
#[derive(Debug, Clone, Default)]
pub struct WorkflowTracker {
    current: Option<Verdict>,
    counts: [usize; 3],
    transitions: usize,
}

impl WorkflowTracker {
    /// Creates a tracker with no state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a verdict, returning the transition if the state changed.
    pub fn observe(&mut self, verdict: Verdict) -> Option<Transition> {
        self.counts[Self::slot(verdict)] += 1;

        if self.current == Some(verdict) {
            return None;
        }

        let transition = Transition {
            from: self.current.replace(verdict),
            to: verdict,
        };
        self.transitions += 1;
        info!(
            from = transition.from.map_or("start", |v| v.label()),
            to = verdict.label(),
            "workflow state changed"
        );
        Some(transition)
    }

    /// The current state.
    #[must_use]
    pub fn current(&self) -> Option<Verdict> {
        self.current
    }

    /// Number of times `verdict` was observed.
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.counts[Self::slot(verdict)]
    }

    /// Total number of observed verdicts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of state changes, including the initial one.
    #[must_use]
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    fn slot(verdict: Verdict) -> usize {
        match verdict {
            Verdict::NoPose => 0,
            Verdict::Detected => 1,
            Verdict::Confirmed => 2,
        }
    }
}
