//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.
//! Key handling, the nav bar, and the help overlay all read from the same registry.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Select,
    Next,
    Back,
    AskAdvisor,
    OpenLink,
    SaveSummary,
    Reset,
    Help,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        // SHIFT is implied for characters like '?'
        self.key == key && (self.modifiers == modifiers || modifiers == KeyModifiers::SHIFT)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('r'), KeyAction::Reset, "R", "Start over"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.mode_bindings.insert(
            AppMode::PartSelection,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous part"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next part"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous part"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next part"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select part"),
                Keybinding::new(KeyCode::Right, KeyAction::Next, "Right", "Next step"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::Next, "N", "Next step"),
                Keybinding::new(KeyCode::Left, KeyAction::Back, "Left", "Previous step"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Previous step"),
                Keybinding::new(KeyCode::Char('a'), KeyAction::AskAdvisor, "A", "AI suggestions"),
                Keybinding::new(KeyCode::Char('o'), KeyAction::OpenLink, "O", "Search retailer"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Summary,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::Back, "Left", "Previous step"),
                Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Previous step"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::SaveSummary, "S", "Save summary"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Action bound to a key in `mode`, if any
    pub fn resolve(&self, mode: &AppMode, key: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::PartSelection => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Next,
                KeyAction::Back,
                KeyAction::AskAdvisor,
                KeyAction::OpenLink,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Summary => vec![
                KeyAction::SaveSummary,
                KeyAction::Back,
                KeyAction::Reset,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        // Combine Up/Down into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;

        for action in priority_actions {
            if (action == KeyAction::NavigateUp || action == KeyAction::NavigateDown) && has_nav {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if action == KeyAction::NavigateUp || action == KeyAction::NavigateDown {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Browse".to_string(),
                    });
                    has_nav = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, &[KeyAction]); 3] = [
            ("Navigation", &[KeyAction::NavigateUp, KeyAction::NavigateDown, KeyAction::Next, KeyAction::Back]),
            ("Actions", &[KeyAction::Select, KeyAction::AskAdvisor, KeyAction::OpenLink, KeyAction::SaveSummary]),
            ("General", &[KeyAction::Reset, KeyAction::Help, KeyAction::Dismiss, KeyAction::Quit]),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, actions)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| actions.contains(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
