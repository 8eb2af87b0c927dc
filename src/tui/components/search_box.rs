//! # SearchBox Component
//!
//! Movie search input with a dropdown of suggestions.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchBoxState` lives in `TuiState` (edit buffer, highlighted suggestion)
//! - `SearchBox` is created each frame with the core `SearchState` as props
//!
//! The buffer mirrors `SearchState::value`; the event loop re-syncs it every
//! frame so a picked suggestion shows up in the input.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::search::{SearchPhase, SearchState};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Clone, PartialEq)]
pub enum SearchBoxEvent {
    /// The text changed; carries the full new text.
    Changed(String),
    /// A suggestion was picked by index.
    Pick(usize),
}

pub struct SearchBoxState {
    pub buffer: String,
    /// Number of suggestions currently shown (Prop)
    pub result_count: usize,
    pub list_state: ListState,
}

impl SearchBoxState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            result_count: 0,
            list_state: ListState::default(),
        }
    }

    /// Sync props from core state before handling events or rendering.
    pub fn sync(&mut self, search: &SearchState) {
        if self.buffer != search.value {
            self.buffer = search.value.clone();
        }
        self.result_count = search.results.len();
        if self
            .list_state
            .selected()
            .is_some_and(|i| i >= self.result_count)
        {
            self.list_state.select(None);
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }
}

impl Default for SearchBoxState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SearchBoxState {
    type Event = SearchBoxEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchBoxEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                self.buffer.push_str(text.trim_end_matches(['\r', '\n']));
                Some(SearchBoxEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| SearchBoxEvent::Changed(self.buffer.clone())),
            TuiEvent::CursorDown => {
                if self.result_count > 0 {
                    let next = self
                        .list_state
                        .selected()
                        .map(|i| (i + 1).min(self.result_count - 1))
                        .unwrap_or(0);
                    self.list_state.select(Some(next));
                }
                None
            }
            TuiEvent::CursorUp => {
                if let Some(i) = self.list_state.selected() {
                    self.list_state.select(i.checked_sub(1));
                }
                None
            }
            TuiEvent::Submit => self.highlighted().map(|i| {
                self.list_state.select(None);
                SearchBoxEvent::Pick(i)
            }),
            _ => None,
        }
    }
}

/// Transient render wrapper for the search box.
pub struct SearchBox<'a> {
    state: &'a mut SearchBoxState,
    search: &'a SearchState,
    focused: bool,
    spinner_frame: usize,
}

impl<'a> SearchBox<'a> {
    pub fn new(
        state: &'a mut SearchBoxState,
        search: &'a SearchState,
        focused: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            search,
            focused,
            spinner_frame,
        }
    }
}

impl Component for SearchBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, results_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let title = if self.search.phase() == SearchPhase::Searching {
            let spin = SPINNER[self.spinner_frame % SPINNER.len()];
            format!(" Search movies {spin} ")
        } else {
            " Search movies ".to_string()
        };

        let border_style = focus_style(self.focused);
        let input_text = if self.state.buffer.is_empty() && !self.focused {
            Line::from(Span::styled(
                "Search movies...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.state.buffer.as_str())
        };

        let input = Paragraph::new(input_text).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(title),
        );
        frame.render_widget(input, input_area);

        if self.focused {
            let x = input_area.x + 1 + self.state.buffer.width() as u16;
            let max_x = input_area.x + input_area.width.saturating_sub(2);
            frame.set_cursor_position((x.min(max_x), input_area.y + 1));
        }

        let items: Vec<ListItem> = self
            .search
            .results
            .iter()
            .map(|movie| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(movie.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(format!("  ★ {}", movie.price), Style::default().fg(Color::Yellow)),
                    ]),
                    Line::from(Span::styled(
                        truncate_str(&movie.description, results_area.width.saturating_sub(4) as usize),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().border_style(border_style).title(" Results "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, results_area, &mut self.state.list_state);
    }
}

pub(crate) fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{head}...")
    }
}
