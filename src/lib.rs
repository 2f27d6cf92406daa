//! rigbuilder library
//!
//! Core of the PC build wizard: the parts catalog, the compatibility filter,
//! the step sequencer, pricing, and the AI advisor. The terminal UI in `app`
//! and `ui` sits on top and holds no rules of its own.

pub mod advisor;
pub mod app;
pub mod build_state;
pub mod catalog;
pub mod cli;
pub mod compat;
pub mod components;
pub mod config_file;
pub mod error;
pub mod links;
pub mod summary;
pub mod theme;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use advisor::{Advisor, AdvisorError, MockAdvisor};
pub use build_state::BuildState;
pub use catalog::{Catalog, Part};
pub use compat::{constraint_hint, eligible_parts};
pub use config_file::AdvisorConfig;
pub use error::RigError;
pub use summary::{format_inr, BuildSummary};
pub use types::{Category, FormFactor, MemoryType, StorageType, CATEGORY_ORDER};
pub use wizard::{Transition, Wizard, WizardPosition};
