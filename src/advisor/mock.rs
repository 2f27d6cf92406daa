//! Scripted advisor.
//!
//! Returns canned text (or a canned error) and counts calls, so tests can
//! assert how many requests the wizard actually issued.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{Advisor, AdvisorError};
use crate::build_state::BuildState;
use crate::types::Category;

#[derive(Debug, Default)]
struct Counters {
    reviews: AtomicUsize,
    recommendations: AtomicUsize,
}

/// Advisor with fixed replies and call counters. Clones share counters.
#[derive(Debug, Clone)]
pub struct MockAdvisor {
    reply: Result<String, AdvisorError>,
    counters: Arc<Counters>,
    /// Categories passed to `recommend_part`, in call order
    asked: Arc<Mutex<Vec<Category>>>,
}

impl MockAdvisor {
    /// Advisor that answers every request with `text`.
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            counters: Arc::default(),
            asked: Arc::default(),
        }
    }

    /// Advisor that fails every request with `error`.
    pub fn failing(error: AdvisorError) -> Self {
        Self {
            reply: Err(error),
            counters: Arc::default(),
            asked: Arc::default(),
        }
    }

    pub fn review_calls(&self) -> usize {
        self.counters.reviews.load(Ordering::SeqCst)
    }

    pub fn recommendation_calls(&self) -> usize {
        self.counters.recommendations.load(Ordering::SeqCst)
    }

    /// Categories recommendations were requested for.
    pub fn asked_categories(&self) -> Vec<Category> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl Advisor for MockAdvisor {
    fn review_build(&self, _build: &BuildState) -> Result<String, AdvisorError> {
        self.counters.reviews.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    fn recommend_part(&self, category: Category, _build: &BuildState) -> Result<String, AdvisorError> {
        self.counters.recommendations.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(category);
        }
        self.reply.clone()
    }
}
