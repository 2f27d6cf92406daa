//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors, styles, and layout constants.
//!
//! # Usage
//! ```rust
//! use rigbuilder::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Panel background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Advisor panel accent
    pub const ADVISOR: Color = Color::Magenta;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    /// Prices and totals
    pub const PRICE: Color = Color::LightGreen;

    /// Star ratings
    pub const RATING: Color = Color::Yellow;

    /// Spec tags next to part names
    pub const TAG: Color = Color::LightBlue;

    // -------------------------------------------------------------------------
    // Step Strip
    // -------------------------------------------------------------------------

    pub const STEP_ACTIVE: Color = Color::Yellow;
    pub const STEP_COMPLETE: Color = Color::Green;
    pub const STEP_PENDING: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Commonly used style combinations
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Bold primary-colored title
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// Highlighted list row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::BG_PRIMARY)
            .bg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn price() -> Style {
        Style::default()
            .fg(Colors::PRICE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }
}

// =============================================================================
// SEMANTIC HELPERS
// =============================================================================

/// Theme helpers
pub struct Theme;

impl Theme {
    /// Style for one segment of the step strip
    pub fn step_style(completed: bool, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else if completed {
            Style::default().fg(Colors::STEP_COMPLETE)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        }
    }
}

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// UI dimension constants
pub struct UiConstants;

impl UiConstants {
    /// Title line plus step strip, with borders
    pub const HEADER_HEIGHT: u16 = 4;

    pub const NAV_BAR_HEIGHT: u16 = 1;

    pub const STATUS_BAR_HEIGHT: u16 = 3;

    /// Advisor panel width as a share of the content area
    pub const ADVISOR_WIDTH_PCT: u16 = 40;

    pub const HELP_WIDTH_PCT: u16 = 60;
    pub const HELP_HEIGHT_PCT: u16 = 70;
}

/// Fixed UI strings
pub struct UiText;

impl UiText {
    pub const APP_TITLE: &'static str = "PC Rig Builder";
    pub const THINKING: &'static str = "Thinking...";
    pub const VERIFYING: &'static str = "Verifying compatibility...";
    pub const NO_PARTS: &'static str = "No compatible parts found for your current selection.";
    pub const ASK_HINT: &'static str = "Press A for AI suggestions on this step.";
}
