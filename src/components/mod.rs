//! Reusable TUI components
//!
//! - `keybindings` - mode-aware key registry feeding input, nav bar, and help
//! - `help_overlay` - centered help window
//! - `nav_bar` - one-line key hint bar

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
