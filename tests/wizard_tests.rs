//! Tests for the Step Sequencer and the App driving it
//!
//! These tests verify:
//! - Advance/retreat guards and bounds
//! - Last selection wins before advancing
//! - Exactly one build review per completion, re-armed only by reset
//! - Key handling end to end with a scripted advisor

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rigbuilder::app::{App, AppMode};
use rigbuilder::compat::eligible_parts;
use rigbuilder::wizard::{Transition, Wizard, SUMMARY_STEP};
use rigbuilder::{Catalog, Category, MockAdvisor, CATEGORY_ORDER};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key_event(key(code)).expect("key handling never fails here")
}

/// Select the highlighted part and move on, for every step.
fn complete_with_keys(app: &mut App) {
    for _ in 0..SUMMARY_STEP {
        press(app, KeyCode::Enter);
        press(app, KeyCode::Right);
    }
}

fn app_with(advisor: &MockAdvisor) -> App {
    App::new(
        Catalog::builtin(),
        Arc::new(advisor.clone()),
        "www.amazon.in",
        PathBuf::from("unused.txt"),
    )
}

// =============================================================================
// Wizard Guards
// =============================================================================

#[test]
fn test_retreat_at_first_step_is_ignored() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.retreat(), Transition::Ignored);
    assert_eq!(wizard.position().index(), 0);
}

#[test]
fn test_advance_at_summary_is_ignored() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new();
    for category in CATEGORY_ORDER {
        let part = eligible_parts(&catalog, category, wizard.build())[0].clone();
        wizard.select_part(part);
        assert!(wizard.advance().moved());
    }
    assert!(wizard.is_complete());
    assert_eq!(wizard.advance(), Transition::Ignored);
    assert_eq!(wizard.position().index(), SUMMARY_STEP);
}

#[test]
fn test_last_selection_wins() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new();
    wizard.select_part(catalog.get("cpu-1").cloned().unwrap());
    wizard.select_part(catalog.get("cpu-4").cloned().unwrap());
    assert_eq!(wizard.build().get(Category::Cpu).unwrap().id, "cpu-4");
    assert_eq!(wizard.build().len(), 1);
}

#[test]
fn test_steps_follow_category_order() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new();
    let mut seen = Vec::new();
    while let Some(category) = wizard.current_category() {
        seen.push(category);
        let part = eligible_parts(&catalog, category, wizard.build())[0].clone();
        wizard.select_part(part);
        wizard.advance();
    }
    assert_eq!(seen, CATEGORY_ORDER.to_vec());
}

#[test]
fn test_review_armed_once_per_session() {
    let catalog = Catalog::builtin();
    let mut wizard = Wizard::new();
    for category in CATEGORY_ORDER {
        let part = eligible_parts(&catalog, category, wizard.build())[0].clone();
        wizard.select_part(part);
        wizard.advance();
    }
    let request = wizard.take_review_request().expect("review armed on completion");
    assert_eq!(request.session, wizard.session());
    assert_eq!(request.build.len(), CATEGORY_ORDER.len());

    wizard.retreat();
    wizard.advance();
    assert!(wizard.take_review_request().is_none());
    assert!(wizard.review_requested());

    wizard.reset();
    assert!(!wizard.review_requested());
    assert_eq!(wizard.position().index(), 0);
    assert!(wizard.build().is_empty());
}

// =============================================================================
// App End to End
// =============================================================================

#[test]
fn test_completing_build_issues_one_review() {
    let advisor = MockAdvisor::replying("Looks great. Mid-range build.");
    let mut app = app_with(&advisor);

    complete_with_keys(&mut app);
    assert_eq!(app.state().mode(), AppMode::Summary);
    assert!(app.wait_for_advisor(Duration::from_secs(5)));
    assert_eq!(app.state().review.as_deref(), Some("Looks great. Mid-range build."));

    // Leave and come back: no second request
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Right);
    assert!(!app.wait_for_advisor(Duration::from_millis(200)));
    assert_eq!(advisor.review_calls(), 1);
}

#[test]
fn test_failed_review_is_not_retried() {
    let advisor = MockAdvisor::failing(rigbuilder::AdvisorError::Status(503));
    let mut app = app_with(&advisor);

    complete_with_keys(&mut app);
    assert!(app.wait_for_advisor(Duration::from_secs(5)));
    assert_eq!(
        app.state().review.as_deref(),
        Some(rigbuilder::advisor::REVIEW_FALLBACK)
    );

    press(&mut app, KeyCode::Char('b'));
    press(&mut app, KeyCode::Char('n'));
    assert!(!app.wait_for_advisor(Duration::from_millis(200)));
    assert_eq!(advisor.review_calls(), 1);
}

#[test]
fn test_reset_rearms_review() {
    let advisor = MockAdvisor::replying("ok");
    let mut app = app_with(&advisor);

    complete_with_keys(&mut app);
    assert!(app.wait_for_advisor(Duration::from_secs(5)));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.state().wizard.position().index(), 0);
    assert!(app.state().review.is_none());

    complete_with_keys(&mut app);
    assert!(app.wait_for_advisor(Duration::from_secs(5)));
    assert_eq!(advisor.review_calls(), 2);
}

#[test]
fn test_next_without_selection_stays_put() {
    let advisor = MockAdvisor::replying("ok");
    let mut app = app_with(&advisor);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().wizard.position().index(), 0);
    assert_eq!(app.state().status_message, "Select a Processor before continuing");
}

#[test]
fn test_recommendation_lands_on_its_category() {
    let advisor = MockAdvisor::replying("Pick a 6-core part.");
    let mut app = app_with(&advisor);
    press(&mut app, KeyCode::Char('a'));
    assert!(app.wait_for_advisor(Duration::from_secs(5)));
    assert_eq!(
        app.state().recommendations.get(&Category::Cpu).map(String::as_str),
        Some("Pick a 6-core part.")
    );
    assert_eq!(advisor.asked_categories(), vec![Category::Cpu]);
}

#[test]
fn test_reply_after_reset_is_discarded() {
    let advisor = MockAdvisor::replying("stale");
    let mut app = app_with(&advisor);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('r'));
    // The reply still arrives but belongs to the old session
    assert!(!app.wait_for_advisor(Duration::from_secs(5)));
    assert!(app.state().recommendations.is_empty());
}

#[test]
fn test_recommendation_for_left_step_is_discarded() {
    let advisor = MockAdvisor::replying("cpu advice");
    let mut app = app_with(&advisor);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().wizard.current_category(), Some(Category::Mobo));

    // The reply arrives while the motherboard step is showing
    assert!(!app.wait_for_advisor(Duration::from_secs(5)));
    assert!(app.state().recommendations.is_empty());

    press(&mut app, KeyCode::Left);
    assert!(app.state().recommendations.get(&Category::Cpu).is_none());
}

#[test]
fn test_am5_build_end_to_end() {
    let advisor = MockAdvisor::replying("Solid AM5 build.");
    let mut app = app_with(&advisor);

    // Ryzen 5 7600X is second in the list
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().wizard.build().get(Category::Cpu).unwrap().id, "cpu-2");
    press(&mut app, KeyCode::Right);

    let boards: Vec<String> = app.state().eligible().iter().map(|p| p.id.clone()).collect();
    assert_eq!(boards, vec!["mobo-2"]);
    for board in app.state().eligible() {
        assert_eq!(board.socket.as_deref(), Some("AM5"));
    }
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Right);

    let board_memory = app.state().wizard.build().get(Category::Mobo).unwrap().memory_type;
    let kits = app.state().eligible();
    assert_eq!(kits.len(), 2);
    for kit in &kits {
        assert_eq!(kit.memory_type, board_memory);
    }

    // Remaining seven steps
    for _ in 2..SUMMARY_STEP {
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
    }
    assert_eq!(app.state().mode(), AppMode::Summary);
    assert_eq!(app.state().wizard.build().len(), CATEGORY_ORDER.len());
    assert!(app.wait_for_advisor(Duration::from_secs(5)));
    assert_eq!(app.state().review.as_deref(), Some("Solid AM5 build."));

    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().mode(), AppMode::Summary);
    assert!(!app.wait_for_advisor(Duration::from_millis(200)));
    assert_eq!(advisor.review_calls(), 1);
}

#[test]
fn test_help_overlay_blocks_wizard_keys() {
    let advisor = MockAdvisor::replying("ok");
    let mut app = app_with(&advisor);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.state().help_visible);
    press(&mut app, KeyCode::Enter);
    assert!(app.state().wizard.build().is_empty());
    press(&mut app, KeyCode::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_quit_key_exits() {
    let advisor = MockAdvisor::replying("ok");
    let mut app = app_with(&advisor);
    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(app
        .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .unwrap());
}
