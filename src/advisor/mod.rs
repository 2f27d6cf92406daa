//! AI advisor
//!
//! The advisor is an external text service. Callers never see its errors:
//! [`review_or_fallback`] and [`recommend_or_fallback`] log the failure and
//! substitute a fixed message.
//!
//! # Module Structure
//! - `prompt` - build description and prompt text
//! - `gemini` - HTTP client for the Gemini API
//! - `mock` - scripted advisor for tests and offline demos
//! - `worker` - runs requests on background threads, tags replies with tickets

pub mod gemini;
pub mod mock;
pub mod prompt;
pub mod worker;

pub use gemini::GeminiAdvisor;
pub use mock::MockAdvisor;
pub use worker::{AdvisorMessage, AdvisorWorker, RequestKind, RequestTicket};

use thiserror::Error;

use crate::build_state::BuildState;
use crate::config_file::AdvisorConfig;
use crate::types::Category;

/// Shown when a build review fails
pub const REVIEW_FALLBACK: &str = "Unable to verify compatibility with AI at the moment.";
/// Shown when a per-category recommendation fails
pub const RECOMMEND_FALLBACK: &str = "Unable to fetch AI recommendations.";

/// Errors from the advisor service. Never surfaced to the user directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    /// No API key in the named environment variable
    #[error("No API key found in ${0}")]
    NotConfigured(String),

    /// Advisor disabled from the command line
    #[error("Advisor disabled (offline mode)")]
    Offline,

    /// Connection, TLS, or timeout failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("Service returned HTTP {0}")]
    Status(u16),

    /// Body could not be decoded
    #[error("Could not decode response: {0}")]
    Decode(String),

    /// Response held no text
    #[error("Service returned no text")]
    EmptyResponse,
}

/// A source of free-form advice about a build.
///
/// Implementations may block; the UI only calls them from worker threads.
pub trait Advisor: Send + Sync {
    /// Review a complete build for compatibility, power, and bottlenecks.
    fn review_build(&self, build: &BuildState) -> Result<String, AdvisorError>;

    /// Suggest what kind of `category` part suits the build so far.
    fn recommend_part(&self, category: Category, build: &BuildState) -> Result<String, AdvisorError>;
}

/// Advisor used when no service is available; every request fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineAdvisor {
    reason: AdvisorError,
}

impl OfflineAdvisor {
    pub fn new(reason: AdvisorError) -> Self {
        Self { reason }
    }
}

impl Advisor for OfflineAdvisor {
    fn review_build(&self, _build: &BuildState) -> Result<String, AdvisorError> {
        Err(self.reason.clone())
    }

    fn recommend_part(&self, _category: Category, _build: &BuildState) -> Result<String, AdvisorError> {
        Err(self.reason.clone())
    }
}

/// Pick the advisor for this run.
///
/// Falls back to [`OfflineAdvisor`] when `offline` is set, when no API key
/// is present, or when the HTTP client cannot be built.
pub fn from_config(config: &AdvisorConfig, offline: bool) -> Box<dyn Advisor> {
    if offline {
        tracing::info!("Advisor disabled by --offline");
        return Box::new(OfflineAdvisor::new(AdvisorError::Offline));
    }
    match GeminiAdvisor::from_config(config) {
        Ok(advisor) => {
            tracing::info!("Advisor using model {}", config.model);
            Box::new(advisor)
        }
        Err(e) => {
            tracing::warn!("Advisor unavailable: {}", e);
            Box::new(OfflineAdvisor::new(e))
        }
    }
}

/// Review `build`, substituting [`REVIEW_FALLBACK`] on failure.
pub fn review_or_fallback(advisor: &dyn Advisor, build: &BuildState) -> String {
    match advisor.review_build(build) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Build review failed: {}", e);
            REVIEW_FALLBACK.to_string()
        }
    }
}

/// Recommend parts for `category`, substituting [`RECOMMEND_FALLBACK`] on failure.
pub fn recommend_or_fallback(advisor: &dyn Advisor, category: Category, build: &BuildState) -> String {
    match advisor.recommend_part(category, build) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Recommendation for {} failed: {}", category, e);
            RECOMMEND_FALLBACK.to_string()
        }
    }
}
