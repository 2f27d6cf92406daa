//! User interface rendering module
//!
//! - `header` - title bar, progress strip, status line, nav bar, help
//! - `screens` - part selection and summary screens

pub mod header;
pub mod screens;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer for the application
///
/// Stateless; everything it draws comes from [`AppState`].
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI with keybinding context
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(5),
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        header::render_header(f, state, chunks[0]);

        match state.mode() {
            AppMode::PartSelection => screens::render_part_selection(f, state, chunks[1]),
            AppMode::Summary => screens::render_summary(f, state, chunks[1]),
        }

        header::render_status(f, state, chunks[2]);
        header::render_nav_bar(f, state, keybinding_ctx, chunks[3]);

        // Help overlay draws on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
