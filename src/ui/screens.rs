//! Wizard screens.
//!
//! - Part selection: eligible parts for the current category next to the
//!   advisor panel
//! - Summary: chosen parts with prices next to the build review

use crate::advisor::RequestKind;
use crate::app::AppState;
use crate::catalog::Part;
use crate::summary::format_inr;
use crate::theme::{Colors, Styles, UiConstants, UiText};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

// ============================================================================
// Part Rows
// ============================================================================

/// Five-character star bar, e.g. `★★★★☆`.
pub fn star_bar(part: &Part) -> String {
    let filled = part.stars();
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// One list row: marker, brand, stars, name, tags, price.
pub fn part_row(part: &Part, chosen: bool) -> Line<'static> {
    let marker = if chosen { "✓ " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Colors::SUCCESS)),
        Span::styled(format!("{:<10}", part.brand), Style::default().fg(Colors::FG_SECONDARY)),
        Span::styled(format!("{} ", star_bar(part)), Style::default().fg(Colors::RATING)),
        Span::styled(part.name.clone(), Styles::text().add_modifier(Modifier::BOLD)),
    ];
    for tag in part.spec_tags() {
        spans.push(Span::styled(format!(" [{}]", tag), Style::default().fg(Colors::TAG)));
    }
    spans.push(Span::styled(
        format!("  {}", format_inr(u64::from(part.price))),
        Styles::price(),
    ));
    Line::from(spans)
}

// ============================================================================
// Part Selection Screen
// ============================================================================

fn split_with_advisor(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - UiConstants::ADVISOR_WIDTH_PCT),
            Constraint::Percentage(UiConstants::ADVISOR_WIDTH_PCT),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render the part list and advisor panel for the current step.
pub fn render_part_selection(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(category) = state.wizard.current_category() else {
        return;
    };
    let (list_area, advisor_area) = split_with_advisor(area);

    let chosen_id = state.wizard.build().get(category).map(|p| p.id.as_str());
    let eligible = state.eligible();
    let title = format!(" Choose your {} ({} available) ", category, eligible.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Colors::SECONDARY))
        .border_style(Styles::border_active());

    if eligible.is_empty() {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(UiText::NO_PARTS, Styles::warning())),
        ];
        if let Some(hint) = state.empty_hint() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(hint, Styles::text_muted())));
        }
        let empty = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        f.render_widget(empty, list_area);
    } else {
        let items: Vec<ListItem> = eligible
            .iter()
            .map(|part| ListItem::new(part_row(part, Some(part.id.as_str()) == chosen_id)))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Styles::selected())
            .highlight_symbol("► ");
        let mut list_state = ListState::default();
        list_state.select(Some(state.cursor));
        f.render_stateful_widget(list, list_area, &mut list_state);
    }

    let text = if state.is_in_flight(RequestKind::Recommendation(category)) {
        UiText::THINKING.to_string()
    } else {
        state
            .recommendations
            .get(&category)
            .cloned()
            .unwrap_or_else(|| UiText::ASK_HINT.to_string())
    };
    render_advisor_panel(f, advisor_area, " AI Suggestions ", &text);
}

fn render_advisor_panel(f: &mut Frame, area: Rect, title: &str, text: &str) {
    let panel = Paragraph::new(text.to_string())
        .style(Styles::text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_style(Style::default().fg(Colors::ADVISOR).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Colors::ADVISOR)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

// ============================================================================
// Summary Screen
// ============================================================================

/// Lines of the summary part list, totals included.
pub fn summary_lines(state: &AppState) -> Vec<Line<'static>> {
    let summary = state.summary();
    let width = summary.lines.iter().map(|l| l.category.len()).max().unwrap_or(0);

    let mut lines: Vec<Line<'static>> = summary
        .lines
        .iter()
        .map(|l| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", l.category, width = width),
                    Style::default().fg(Colors::SECONDARY),
                ),
                Span::styled(l.name.clone(), Styles::text()),
                Span::styled(format!("  {}", format_inr(u64::from(l.price))), Styles::price()),
            ])
        })
        .collect();

    if !summary.missing.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Not selected: {}", summary.missing.join(", ")),
            Styles::warning(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Estimated Total Cost: ", Styles::title()),
        Span::styled(format_inr(summary.total), Styles::price()),
    ]));
    if summary.estimated_draw > 0 {
        lines.push(Line::from(Span::styled(
            format!("Estimated CPU + GPU draw: {}W", summary.estimated_draw),
            Styles::text_muted(),
        )));
    }
    lines
}

/// Render the finished build and its review.
pub fn render_summary(f: &mut Frame, state: &AppState, area: Rect) {
    let (list_area, review_area) = split_with_advisor(area);

    let parts = Paragraph::new(summary_lines(state)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Your Build ")
            .title_style(Style::default().fg(Colors::SECONDARY))
            .border_style(Styles::border_active()),
    );
    f.render_widget(parts, list_area);

    let text = if state.is_in_flight(RequestKind::Review) {
        UiText::VERIFYING.to_string()
    } else {
        state.review.clone().unwrap_or_default()
    };
    render_advisor_panel(f, review_area, " AI Compatibility Report ", &text);
}
