//! Application state definitions
//!
//! Everything the UI renders lives here. Nothing in this module touches the
//! terminal or spawns threads, so every key path can be driven from tests.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::advisor::{AdvisorMessage, RequestKind, RequestTicket};
use crate::catalog::{Catalog, Part};
use crate::compat::{constraint_hint, eligible_parts};
use crate::links;
use crate::summary::BuildSummary;
use crate::types::Category;
use crate::wizard::{Transition, Wizard};

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Choosing a part for the current category
    PartSelection,
    /// Reviewing the finished build
    Summary,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub wizard: Wizard,
    pub catalog: Catalog,
    /// Highlighted row in the eligible-parts list
    pub cursor: usize,
    /// Latest suggestion per category for the current session
    pub recommendations: HashMap<Category, String>,
    /// Build review for the current session
    pub review: Option<String>,
    /// Requests issued in the current session with no reply yet
    pub in_flight: HashSet<RequestTicket>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Retailer host for search links
    pub retailer: String,
    /// Where `s` writes the summary
    pub summary_path: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog, retailer: &str, summary_path: PathBuf) -> Self {
        Self {
            wizard: Wizard::new(),
            catalog,
            cursor: 0,
            recommendations: HashMap::new(),
            review: None,
            in_flight: HashSet::new(),
            help_visible: false,
            status_message: "Pick a processor to start your build".to_string(),
            retailer: retailer.to_string(),
            summary_path,
        }
    }

    pub fn mode(&self) -> AppMode {
        if self.wizard.is_complete() {
            AppMode::Summary
        } else {
            AppMode::PartSelection
        }
    }

    /// Parts offered at the current step, empty on the summary.
    pub fn eligible(&self) -> Vec<&Part> {
        match self.wizard.current_category() {
            Some(category) => eligible_parts(&self.catalog, category, self.wizard.build()),
            None => Vec::new(),
        }
    }

    /// Part under the cursor, if any.
    pub fn highlighted(&self) -> Option<&Part> {
        self.eligible().get(self.cursor).copied()
    }

    /// Empty-state hint for the current step, e.g. "Try changing your Processor".
    pub fn empty_hint(&self) -> Option<String> {
        let category = self.wizard.current_category()?;
        constraint_hint(category, self.wizard.build())
            .map(|source| format!("Try changing your {}", source))
    }

    pub fn navigate_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        let len = self.eligible().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Select the highlighted part for the current step.
    pub fn select_highlighted(&mut self) {
        let Some(part) = self.highlighted().cloned() else {
            self.status_message = "Nothing to select here".to_string();
            return;
        };
        let name = part.name.clone();
        match self.wizard.select_part(part) {
            Some(previous) if previous.name != name => {
                self.status_message = format!("Replaced {} with {}", previous.name, name);
            }
            _ => self.status_message = format!("Selected {}", name),
        }
    }

    pub fn advance(&mut self) -> Transition {
        let transition = self.wizard.advance();
        if transition.moved() {
            self.sync_cursor();
            self.status_message = match self.wizard.current_category() {
                Some(category) => format!("Choose your {}", category),
                None => "Build complete".to_string(),
            };
        } else if let Some(category) = self.wizard.current_category() {
            self.status_message = format!("Select a {} before continuing", category);
        }
        transition
    }

    pub fn retreat(&mut self) -> Transition {
        let transition = self.wizard.retreat();
        if transition.moved() {
            self.sync_cursor();
            if let Some(category) = self.wizard.current_category() {
                self.status_message = format!("Choose your {}", category);
            }
        }
        transition
    }

    /// Start over. Replies to requests issued before this are ignored.
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.cursor = 0;
        self.recommendations.clear();
        self.review = None;
        self.in_flight.clear();
        self.status_message = "Build cleared".to_string();
    }

    /// Put the cursor on the current step's selection, or the top.
    fn sync_cursor(&mut self) {
        let selected = self
            .wizard
            .current_category()
            .and_then(|c| self.wizard.build().get(c))
            .map(|p| p.id.clone());
        self.cursor = selected
            .and_then(|id| self.eligible().iter().position(|p| p.id == id))
            .unwrap_or(0);
    }

    /// Record an outgoing request.
    pub fn track(&mut self, ticket: RequestTicket) {
        self.in_flight.insert(ticket);
    }

    pub fn is_in_flight(&self, kind: RequestKind) -> bool {
        self.in_flight
            .iter()
            .any(|t| t.kind == kind && t.session == self.wizard.session())
    }

    /// Store a reply if it belongs to a request still outstanding in this
    /// session. A recommendation also needs its category to still be on
    /// screen. Returns whether it was applied.
    pub fn apply_advisor_message(&mut self, msg: AdvisorMessage) -> bool {
        let outstanding = self.in_flight.remove(&msg.ticket);
        let current = match msg.ticket.kind {
            RequestKind::Review => true,
            RequestKind::Recommendation(category) => {
                self.wizard.current_category() == Some(category)
            }
        };
        if msg.ticket.session != self.wizard.session() || !outstanding || !current {
            tracing::warn!("Dropping stale advisor reply {:?}", msg.ticket);
            return false;
        }
        match msg.ticket.kind {
            RequestKind::Review => self.review = Some(msg.text),
            RequestKind::Recommendation(category) => {
                self.recommendations.insert(category, msg.text);
            }
        }
        true
    }

    /// Summary of the current build with any review received.
    pub fn summary(&self) -> BuildSummary {
        BuildSummary::new(self.wizard.build(), self.review.as_deref())
    }

    /// Search link for the highlighted part.
    pub fn highlighted_link(&self) -> Option<String> {
        self.highlighted()
            .map(|p| links::search_url(&self.retailer, &p.name))
    }
}
