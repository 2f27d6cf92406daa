//! Application module
//!
//! Contains the main application logic and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop
//!
//! Advisor requests run on worker threads and report back over a channel
//! that the event loop drains every tick, so the UI never blocks on the
//! network.

mod state;

pub use state::{AppMode, AppState};

use crate::advisor::{Advisor, AdvisorMessage, AdvisorWorker, RequestKind};
use crate::catalog::Catalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::links;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution and navigation hints
    keybinding_context: KeybindingContext,
    worker: AdvisorWorker,
    /// Replies from advisor threads (polled in main loop)
    advisor_rx: Receiver<AdvisorMessage>,
}

impl App {
    /// Create a new application instance
    pub fn new(
        catalog: Catalog,
        advisor: Arc<dyn Advisor>,
        retailer: &str,
        summary_path: PathBuf,
    ) -> Self {
        info!("Creating new App instance ({} parts)", catalog.len());
        let (worker, advisor_rx) = AdvisorWorker::new(advisor);

        Self {
            state: AppState::new(catalog, retailer, summary_path),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            worker,
            advisor_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Apply every advisor reply that has arrived. Returns how many were applied.
    pub fn poll_advisor_messages(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.advisor_rx.try_recv() {
            if self.state.apply_advisor_message(msg) {
                applied += 1;
            }
        }
        applied
    }

    /// Block until one advisor reply arrives or `timeout` passes, then apply it.
    ///
    /// Returns whether a reply was applied.
    pub fn wait_for_advisor(&mut self, timeout: Duration) -> bool {
        match self.advisor_rx.recv_timeout(timeout) {
            Ok(msg) => self.state.apply_advisor_message(msg),
            Err(_) => false,
        }
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.poll_advisor_messages();

            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context)
            })?;

            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    // Windows reports releases too
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key_event(key_event)? {
                        break;
                    }
                }
            }
        }

        info!("Exiting main application loop");
        Ok(())
    }

    /// Handle keyboard input. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        let mode = self.state.mode();
        let Some(action) =
            self.keybinding_context
                .resolve(&mode, key_event.code, key_event.modifiers)
        else {
            return Ok(false);
        };

        // Help overlay swallows everything but its own keys and quit
        if self.state.help_visible {
            match action {
                KeyAction::Help | KeyAction::Dismiss => self.toggle_help(),
                KeyAction::Quit => return Ok(true),
                _ => {}
            }
            return Ok(false);
        }

        self.perform(action)
    }

    /// Carry out a resolved action. Returns `true` when the app should exit.
    pub fn perform(&mut self, action: KeyAction) -> Result<bool> {
        debug!("Action {:?} at {}", action, self.state.wizard.position());
        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Help => self.toggle_help(),
            KeyAction::Dismiss => {}
            KeyAction::NavigateUp => self.state.navigate_up(),
            KeyAction::NavigateDown => self.state.navigate_down(),
            KeyAction::Select => self.state.select_highlighted(),
            KeyAction::Next => {
                if self.state.advance().moved() {
                    self.dispatch_review();
                }
            }
            KeyAction::Back => {
                self.state.retreat();
            }
            KeyAction::Reset => self.state.reset(),
            KeyAction::AskAdvisor => self.ask_advisor(),
            KeyAction::OpenLink => self.open_link(),
            KeyAction::SaveSummary => self.save_summary(),
        }
        Ok(false)
    }

    /// Send the review armed by reaching the summary, if there is one.
    fn dispatch_review(&mut self) {
        if let Some(request) = self.state.wizard.take_review_request() {
            info!("Requesting build review (session {})", request.session);
            let ticket = self.worker.request_review(request.session, request.build);
            self.state.track(ticket);
        }
    }

    fn ask_advisor(&mut self) {
        let Some(category) = self.state.wizard.current_category() else {
            return;
        };
        if self.state.is_in_flight(RequestKind::Recommendation(category)) {
            self.state.status_message = "Still waiting for the advisor...".to_string();
            return;
        }
        let session = self.state.wizard.session();
        let ticket =
            self.worker
                .request_recommendation(session, category, self.state.wizard.build().clone());
        self.state.track(ticket);
        self.state.status_message = format!("Asking the advisor about {}...", category);
    }

    fn open_link(&mut self) {
        let Some(url) = self.state.highlighted_link() else {
            return;
        };
        self.state.status_message = match links::open_in_browser(&url) {
            Ok(()) => format!("Opened {}", url),
            Err(e) => {
                warn!("{}", e);
                format!("Could not open browser: {}", url)
            }
        };
    }

    fn save_summary(&mut self) {
        let path = self.state.summary_path.clone();
        self.state.status_message = match self.state.summary().save_to_file(&path) {
            Ok(()) => format!("Summary saved to {}", path.display()),
            Err(e) => {
                warn!("Saving summary failed: {:#}", e);
                format!("Could not save summary: {}", e)
            }
        };
    }
}
