//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event flow
//!
//! ```text
//! key press ──► TuiEvent ──► focused component ──► Action ──► update()
//!                                                               │
//!          SearchDriver (timer / HTTP task) ◄──── Effect ◄──────┘
//!                 │
//!                 └── Action over mpsc ──► drained every loop iteration
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the search spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or background actions.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::search::SearchPhase;
use crate::core::state::App;
use crate::search::{MovieSearch, SearchDriver, TmdbClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AddFriendEvent, AddFriendFormState, FriendListEvent, FriendListState, SearchBoxEvent,
    SearchBoxState, SplitBillEvent, SplitBillFormState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Friends,
    AddFriend,
    SplitBill,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub search_box: SearchBoxState,
    pub friend_list: FriendListState,
    pub add_friend: AddFriendFormState,
    pub split_bill: SplitBillFormState,
    /// Friend the split form was last filled in for.
    split_for: Option<String>,
    add_open: bool,
}

impl TuiState {
    pub fn new(friend_count: usize) -> Self {
        Self {
            focus: Focus::Friends,
            search_box: SearchBoxState::new(),
            friend_list: FriendListState::new(friend_count),
            add_friend: AddFriendFormState::new(),
            split_bill: SplitBillFormState::new(),
            split_for: None,
            add_open: false,
        }
    }

    /// Panes that can currently take focus, in Tab order.
    fn available_focus(app: &App) -> Vec<Focus> {
        let mut panes = vec![Focus::Search, Focus::Friends];
        if app.ledger.show_add_form {
            panes.push(Focus::AddFriend);
        }
        if app.ledger.selected.is_some() {
            panes.push(Focus::SplitBill);
        }
        panes
    }

    fn cycle_focus(&mut self, app: &App, forward: bool) {
        let panes = Self::available_focus(app);
        let current = panes.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % panes.len()
        } else {
            (current + panes.len() - 1) % panes.len()
        };
        self.focus = panes[next];
    }

    /// Sync component props with `App` after every state change.
    ///
    /// A newly selected friend gets a fresh split form and focus; a form
    /// that disappears hands focus back to the friends list.
    pub fn sync(&mut self, app: &App) {
        self.search_box.sync(&app.search);
        self.friend_list.sync(app.ledger.friends.len());

        if app.ledger.selected != self.split_for {
            self.split_bill.reset();
            self.split_for = app.ledger.selected.clone();
            if self.split_for.is_some() {
                self.focus = Focus::SplitBill;
            }
        }

        if app.ledger.show_add_form && !self.add_open {
            self.focus = Focus::AddFriend;
        }
        self.add_open = app.ledger.show_add_form;

        if !Self::available_focus(app).contains(&self.focus) {
            self.focus = Focus::Friends;
        }
    }
}

/// Routes one terminal event to the focused pane and returns the resulting action.
pub fn dispatch_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::ToggleAddFriend => Some(Action::ToggleAddFriendForm),
        TuiEvent::FocusNext => {
            tui.cycle_focus(app, true);
            None
        }
        TuiEvent::FocusPrev => {
            tui.cycle_focus(app, false);
            None
        }
        TuiEvent::Escape => {
            tui.focus = Focus::Friends;
            None
        }
        _ => match tui.focus {
            Focus::Search => match tui.search_box.handle_event(event)? {
                SearchBoxEvent::Changed(text) => Some(Action::SearchChanged(text)),
                SearchBoxEvent::Pick(index) => app
                    .search
                    .results
                    .get(index)
                    .map(|movie| Action::SelectResult(movie.title.clone())),
            },
            Focus::Friends => match tui.friend_list.handle_event(event)? {
                FriendListEvent::Toggle(index) => app
                    .ledger
                    .friends
                    .get(index)
                    .map(|friend| Action::SelectFriend(friend.id.clone())),
            },
            Focus::AddFriend => match tui.add_friend.handle_event(event)? {
                AddFriendEvent::Submit(friend) => Some(Action::AddFriend(friend)),
            },
            Focus::SplitBill => match tui.split_bill.handle_event(event)? {
                SplitBillEvent::Split(amount) => Some(Action::SplitBill(amount)),
            },
        },
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Build the movie search provider from the resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn MovieSearch> {
    if config.tmdb_api_key.is_none() {
        warn!("No TMDB API key configured; movie searches will fail");
    }
    Arc::new(TmdbClient::new(
        config.tmdb_api_key.clone(),
        config.tmdb_base_url.clone(),
        config.tmdb_image_base_url.clone(),
    ))
}

/// Must be called from within a tokio runtime.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(app.ledger.friends.len());

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut driver = SearchDriver::new(
        build_provider(&config),
        Duration::from_millis(config.debounce_ms),
        tx,
    );

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(ref e) = guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui, &mut driver, &rx);

    // Release the pending debounce timer before tearing down
    driver.shutdown();
    drop(guard);
    ratatui::restore();
    info!("EvenUp shut down");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    driver: &mut SearchDriver,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(app);

        let animating = app.search.phase() == SearchPhase::Searching;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = dispatch_event(app, tui, &event) {
                debug!("Dispatching {:?}", action);
                let effect = update(app, action);
                if driver.perform(effect) == Some(Effect::Quit) {
                    should_quit = true;
                }
                tui.sync(app);
            }
        }

        if should_quit {
            return Ok(());
        }

        // Handle background task actions (timer fires, search results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(app, action);
            if driver.perform(effect) == Some(Effect::Quit) {
                return Ok(());
            }
        }
    }
}
