//! Property-Based Tests for rigbuilder
//!
//! Uses proptest to drive the wizard and filter with arbitrary inputs.
//!
//! These tests verify:
//! - Filter output is a catalog-ordered subset of the requested category
//! - Any build reached through the wizard is pairwise compatible
//! - Position never leaves 0..=9 under any action sequence
//! - Selecting is idempotent and reset always restores the initial state
//! - Rupee formatting keeps every digit

use proptest::prelude::*;

use rigbuilder::compat::eligible_parts;
use rigbuilder::wizard::{Wizard, SUMMARY_STEP};
use rigbuilder::{format_inr, BuildState, Catalog, Category, CATEGORY_ORDER};

// =============================================================================
// Strategies
// =============================================================================

/// Strategy for generating Category variants
fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Cpu),
        Just(Category::Mobo),
        Just(Category::Ram),
        Just(Category::Gpu),
        Just(Category::Storage),
        Just(Category::Cooler),
        Just(Category::Psu),
        Just(Category::Case),
        Just(Category::Monitor),
    ]
}

/// A user action against the wizard. `Select(n)` picks the n-th eligible
/// part modulo the list length.
#[derive(Debug, Clone)]
enum Action {
    Select(usize),
    Advance,
    Retreat,
    Reset,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..8).prop_map(Action::Select),
        4 => Just(Action::Advance),
        2 => Just(Action::Retreat),
        1 => Just(Action::Reset),
    ]
}

/// Arbitrary build from any catalog parts, compatible or not.
fn build_strategy() -> impl Strategy<Value = BuildState> {
    let catalog = Catalog::builtin();
    let count = catalog.len();
    prop::collection::vec(0..count, 0..12).prop_map(move |picks| {
        let mut build = BuildState::new();
        for i in picks {
            build.select_part(catalog.parts()[i].clone());
        }
        build
    })
}

fn apply(wizard: &mut Wizard, catalog: &Catalog, action: &Action) {
    match action {
        Action::Select(n) => {
            if let Some(category) = wizard.current_category() {
                let parts = eligible_parts(catalog, category, wizard.build());
                if !parts.is_empty() {
                    let part = parts[n % parts.len()].clone();
                    wizard.select_part(part);
                }
            }
        }
        Action::Advance => {
            wizard.advance();
        }
        Action::Retreat => {
            wizard.retreat();
        }
        Action::Reset => wizard.reset(),
    }
}

// =============================================================================
// Filter Properties
// =============================================================================

proptest! {
    /// Filter output is a subsequence of the category in catalog order
    #[test]
    fn filter_is_ordered_subset(category in category_strategy(), build in build_strategy()) {
        let catalog = Catalog::builtin();
        let all: Vec<&str> = catalog.in_category(category).map(|p| p.id.as_str()).collect();
        let got: Vec<&str> = eligible_parts(&catalog, category, &build)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        let mut cursor = all.iter();
        for id in &got {
            prop_assert!(cursor.any(|a| a == id), "{} out of order or foreign", id);
        }
    }

    /// Filtering is pure: same inputs, same output
    #[test]
    fn filter_is_deterministic(category in category_strategy(), build in build_strategy()) {
        let catalog = Catalog::builtin();
        let first: Vec<String> = eligible_parts(&catalog, category, &build).iter().map(|p| p.id.clone()).collect();
        let second: Vec<String> = eligible_parts(&catalog, category, &build).iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Wizard Properties
// =============================================================================

proptest! {
    /// Position stays within 0..=SUMMARY_STEP and moves at most one step
    #[test]
    fn position_stays_in_bounds(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let catalog = Catalog::builtin();
        let mut wizard = Wizard::new();
        for action in &actions {
            let before = wizard.position().index();
            apply(&mut wizard, &catalog, action);
            let after = wizard.position().index();
            prop_assert!(after <= SUMMARY_STEP);
            if !matches!(action, Action::Reset) {
                prop_assert!(before.abs_diff(after) <= 1);
            }
        }
    }

    /// Every step before the current one has a selection
    #[test]
    fn earlier_steps_are_filled(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let catalog = Catalog::builtin();
        let mut wizard = Wizard::new();
        for action in &actions {
            apply(&mut wizard, &catalog, action);
        }
        let position = wizard.position().index();
        for category in &CATEGORY_ORDER[..position] {
            prop_assert!(wizard.build().contains(*category));
        }
    }

    /// A build made only from offered parts, moving forward only, is compatible
    #[test]
    fn forward_builds_are_compatible(picks in prop::collection::vec(0usize..8, SUMMARY_STEP)) {
        let catalog = Catalog::builtin();
        let mut wizard = Wizard::new();
        for n in &picks {
            apply(&mut wizard, &catalog, &Action::Select(*n));
            wizard.advance();
        }

        let build = wizard.build();
        if let (Some(cpu), Some(mobo)) = (build.get(Category::Cpu), build.get(Category::Mobo)) {
            prop_assert_eq!(&cpu.socket, &mobo.socket);
        }
        if let (Some(ram), Some(mobo)) = (build.get(Category::Ram), build.get(Category::Mobo)) {
            prop_assert_eq!(ram.memory_type, mobo.memory_type);
        }
        if let (Some(case), Some(mobo)) = (build.get(Category::Case), build.get(Category::Mobo)) {
            if mobo.form_factor == Some(rigbuilder::FormFactor::Atx) {
                prop_assert_eq!(case.form_factor, Some(rigbuilder::FormFactor::Atx));
            }
        }
    }

    /// Selecting the same part twice equals selecting it once
    #[test]
    fn select_is_idempotent(build in build_strategy(), index in 0usize..25) {
        let catalog = Catalog::builtin();
        let part = catalog.parts()[index % catalog.len()].clone();

        let mut once = build.clone();
        once.select_part(part.clone());
        let mut twice = once.clone();
        twice.select_part(part);
        prop_assert_eq!(once, twice);
    }

    /// Reset returns to the initial state and arms exactly one new review
    #[test]
    fn reset_restores_initial_state(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let catalog = Catalog::builtin();
        let mut wizard = Wizard::new();
        for action in &actions {
            apply(&mut wizard, &catalog, action);
        }
        let session = wizard.session();
        wizard.reset();
        prop_assert_eq!(wizard.position().index(), 0);
        prop_assert!(wizard.build().is_empty());
        prop_assert!(!wizard.review_requested());
        prop_assert!(wizard.take_review_request().is_none());
        prop_assert_eq!(wizard.session(), session + 1);
    }

    /// Total equals the sum of the selected part prices
    #[test]
    fn total_matches_parts(build in build_strategy()) {
        let sum: u64 = build.iter().map(|(_, p)| u64::from(p.price)).sum();
        prop_assert_eq!(build.total_price(), sum);
    }
}

// =============================================================================
// Formatting Properties
// =============================================================================

proptest! {
    /// Stripping the symbol and commas gives back the number
    #[test]
    fn format_inr_keeps_digits(amount in any::<u64>()) {
        let formatted = format_inr(amount);
        prop_assert!(formatted.starts_with('₹'));
        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits, amount.to_string());
    }

    /// Groups after the first are two digits, the last is three
    #[test]
    fn format_inr_group_sizes(amount in 1_000u64..u64::MAX) {
        let formatted = format_inr(amount);
        let body = formatted.trim_start_matches('₹');
        let groups: Vec<&str> = body.split(',').collect();
        prop_assert_eq!(groups.last().map(|g| g.len()), Some(3));
        for group in &groups[1..groups.len() - 1] {
            prop_assert_eq!(group.len(), 2);
        }
        prop_assert!(groups[0].len() <= 2);
    }
}
