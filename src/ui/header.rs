//! Header and common widget rendering
//!
//! Title bar with the step counter, the category progress strip, the
//! status line, the nav bar, and the help overlay.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::summary::format_inr;
use crate::theme::{Colors, Styles, Theme, UiText};
use crate::types::{CATEGORY_COUNT, CATEGORY_ORDER};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// "Step k of 9", or "Summary" once every step is done.
pub fn step_label(state: &AppState) -> String {
    let position = state.wizard.position();
    if position.is_summary() {
        "Summary".to_string()
    } else {
        format!("Step {} of {}", position.index() + 1, CATEGORY_COUNT)
    }
}

/// One segment per category: filled when selected, bold at the current step.
pub fn progress_strip(state: &AppState) -> Line<'static> {
    let current = state.wizard.current_category();
    let build = state.wizard.build();
    let mut spans = Vec::with_capacity(CATEGORY_COUNT * 2);

    for (i, category) in CATEGORY_ORDER.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default()));
        }
        let done = build.contains(*category);
        let active = current == Some(*category);
        let marker = if done { "■" } else { "□" };
        spans.push(Span::styled(
            format!("{} {}", marker, category.short_name()),
            Theme::step_style(done, active),
        ));
    }
    Line::from(spans)
}

/// Render the title bar and progress strip
pub fn render_header(f: &mut Frame, state: &AppState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let running_total = format_inr(state.wizard.build().total_price());
    let title = Line::from(vec![
        Span::styled(UiText::APP_TITLE, Styles::title()),
        Span::styled("  |  ", Styles::text_muted()),
        Span::styled(step_label(state), Style::default().fg(Colors::SECONDARY)),
        Span::styled("  |  ", Styles::text_muted()),
        Span::styled(running_total, Styles::price()),
    ]);

    let header = Paragraph::new(vec![title, progress_strip(state)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active()),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Render the status line
pub fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let status = Paragraph::new(state.status_message.as_str())
        .style(Style::default().fg(Colors::FG_SECONDARY))
        .block(Block::default().borders(Borders::TOP).border_style(Styles::text_muted()));
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode());
    NavBar::new(nav_items).render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode(), keybinding_ctx);
    help_overlay.render(f, f.area());
}
