//! Build Wizard State Machine
//!
//! Owns the step position and the build, and is the only place either is
//! mutated. Transitions never fail: a move the guards reject is reported as
//! [`Transition::Ignored`] and leaves the state untouched.
//!
//! # Step Flow
//!
//! ```text
//! 0 Processor -> 1 Motherboard -> 2 Memory -> 3 Graphics Card -> 4 Storage
//!   -> 5 Cooler -> 6 Power Supply -> 7 Cabinet -> 8 Monitor -> 9 Summary
//! ```
//!
//! - `advance()` needs a selection for the current step and a position below 9
//! - `retreat()` needs a position above 0
//! - `reset()` always returns to step 0 with an empty build
//!
//! # Review Observer
//!
//! The first time the wizard enters the summary state it arms a single
//! build-review request, collected with [`Wizard::take_review_request`].
//! Leaving and re-entering the summary does not arm another one; only
//! `reset()` does. The flag is independent of whether advisory text ever
//! arrived, so a failed review is not retried behind the user's back.

use std::fmt;

use crate::build_state::BuildState;
use crate::catalog::Part;
use crate::types::{CATEGORY_COUNT, CATEGORY_ORDER, Category};

/// Index of the summary step.
pub const SUMMARY_STEP: usize = CATEGORY_COUNT;

/// Result of a wizard transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Position changed.
    Moved { from: usize, to: usize },
    /// Guard rejected the move; nothing changed.
    Ignored,
}

impl Transition {
    pub fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Position in the wizard, `0..=SUMMARY_STEP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardPosition(usize);

impl WizardPosition {
    pub const fn index(self) -> usize {
        self.0
    }

    /// Category asked for at this step, `None` on the summary step.
    pub fn category(self) -> Option<Category> {
        CATEGORY_ORDER.get(self.0).copied()
    }

    pub const fn is_summary(self) -> bool {
        self.0 == SUMMARY_STEP
    }
}

impl fmt::Display for WizardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            Some(category) => write!(f, "step {} ({})", self.0 + 1, category),
            None => write!(f, "summary"),
        }
    }
}

/// A build review armed by entering the summary step.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRequest {
    /// Session the request belongs to; see [`Wizard::session`].
    pub session: u64,
    /// Snapshot of the build at the moment the summary was reached.
    pub build: BuildState,
}

/// Step sequencer plus the build it drives.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    position: WizardPosition,
    build: BuildState,
    /// Set once a review has been armed for this session
    review_requested: bool,
    /// Armed review waiting to be collected
    pending_review: Option<ReviewRequest>,
    /// Bumped on every reset so stale advisor replies can be recognised
    session: u64,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> WizardPosition {
        self.position
    }

    pub fn build(&self) -> &BuildState {
        &self.build
    }

    /// Current session number. Changes only on `reset()`.
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Category of the current step, `None` on the summary.
    pub fn current_category(&self) -> Option<Category> {
        self.position.category()
    }

    pub fn is_complete(&self) -> bool {
        self.position.is_summary()
    }

    /// Whether a review has already been armed in this session.
    pub fn review_requested(&self) -> bool {
        self.review_requested
    }

    /// Whether `advance()` would move right now.
    pub fn can_advance(&self) -> bool {
        match self.current_category() {
            Some(category) => self.build.contains(category),
            None => false,
        }
    }

    pub fn can_retreat(&self) -> bool {
        self.position.0 > 0
    }

    /// Record a choice. Overwrites any earlier part of the same category.
    pub fn select_part(&mut self, part: Part) -> Option<Part> {
        self.build.select_part(part)
    }

    /// Move one step forward if the current step has a selection.
    pub fn advance(&mut self) -> Transition {
        if !self.can_advance() {
            tracing::debug!("Advance ignored at {}", self.position);
            return Transition::Ignored;
        }
        let from = self.position.0;
        self.position.0 += 1;
        self.on_enter();
        tracing::debug!("Advanced to {}", self.position);
        Transition::Moved { from, to: self.position.0 }
    }

    /// Move one step back unless already at the first step.
    pub fn retreat(&mut self) -> Transition {
        if !self.can_retreat() {
            tracing::debug!("Retreat ignored at {}", self.position);
            return Transition::Ignored;
        }
        let from = self.position.0;
        self.position.0 -= 1;
        tracing::debug!("Retreated to {}", self.position);
        Transition::Moved { from, to: self.position.0 }
    }

    /// Back to step 0 with an empty build and a re-armed review.
    pub fn reset(&mut self) {
        self.position = WizardPosition::default();
        self.build.clear();
        self.review_requested = false;
        self.pending_review = None;
        self.session = self.session.wrapping_add(1);
        tracing::info!("Wizard reset (session {})", self.session);
    }

    /// Collect the review armed by the last entry into the summary, if any.
    ///
    /// Returns `Some` at most once per session.
    pub fn take_review_request(&mut self) -> Option<ReviewRequest> {
        self.pending_review.take()
    }

    fn on_enter(&mut self) {
        if self.position.is_summary() && !self.review_requested {
            self.review_requested = true;
            self.pending_review = Some(ReviewRequest {
                session: self.session,
                build: self.build.clone(),
            });
            tracing::info!(
                "Build complete: {} parts, total {}",
                self.build.len(),
                self.build.total_price()
            );
        }
    }
}
