//! # FriendList Component
//!
//! Scrollable list of friends with their balance line. The row under the
//! cursor is highlighted; the selected friend (the one a bill is being split
//! with) is marked with `▶` and a "Close" hint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::ledger::{BalanceStatus, Friend};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::search_box::focus_style;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum FriendListEvent {
    /// Toggle selection of the friend at this index.
    Toggle(usize),
}

pub struct FriendListState {
    /// Number of friends (Prop)
    pub len: usize,
    pub list_state: ListState,
}

impl FriendListState {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self { len, list_state }
    }

    pub fn sync(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.list_state.select(None);
        } else if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }
}

impl EventHandler for FriendListState {
    type Event = FriendListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                if let Some(i) = self.cursor() {
                    self.list_state.select(Some(i.saturating_sub(1)));
                }
                None
            }
            TuiEvent::CursorDown => {
                if let Some(i) = self.cursor() {
                    self.list_state.select(Some((i + 1).min(self.len.saturating_sub(1))));
                }
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => self.cursor().map(FriendListEvent::Toggle),
            _ => None,
        }
    }
}

/// Transient render wrapper for the friend list.
pub struct FriendList<'a> {
    state: &'a mut FriendListState,
    friends: &'a [Friend],
    selected: Option<&'a str>,
    currency: &'a str,
    focused: bool,
}

impl<'a> FriendList<'a> {
    pub fn new(
        state: &'a mut FriendListState,
        friends: &'a [Friend],
        selected: Option<&'a str>,
        currency: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            state,
            friends,
            selected,
            currency,
            focused,
        }
    }
}

fn balance_style(status: &BalanceStatus) -> Style {
    match status {
        BalanceStatus::Owe(_) => Style::default().fg(Color::Red),
        BalanceStatus::Owed(_) => Style::default().fg(Color::Green),
        BalanceStatus::Even => Style::default(),
    }
}

impl Component for FriendList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .friends
            .iter()
            .map(|friend| {
                let is_selected = self.selected == Some(friend.id.as_str());
                let status = friend.status();
                let marker = if is_selected { "▶ " } else { "  " };
                let action = if is_selected { "  [Close]" } else { "  [Select]" };

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, Style::default().fg(Color::Yellow)),
                        Span::styled(friend.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(action, Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", status.describe(&friend.name, self.currency)),
                        balance_style(&status),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_style(focus_style(self.focused))
                    .title(" Friends ")
                    .title_bottom(Line::from(" Ctrl+A Add friend ").centered()),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::seed_friends;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_cursor_clamped_to_list() {
        let mut state = FriendListState::new(3);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.cursor(), Some(0));
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.cursor(), Some(2));
    }

    #[test]
    fn test_enter_and_space_toggle() {
        let mut state = FriendListState::new(3);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(FriendListEvent::Toggle(1)));
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(' ')),
            Some(FriendListEvent::Toggle(1))
        );
    }

    #[test]
    fn test_empty_list_emits_nothing() {
        let mut state = FriendListState::new(0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        state.sync(2);
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn test_render_balance_lines() {
        let friends = seed_friends();
        let mut state = FriendListState::new(friends.len());
        let backend = TestBackend::new(50, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                FriendList::new(&mut state, &friends, Some("933372"), "€", true).render(f, f.area())
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("You owe Clark 7€"));
        assert!(text.contains("Sarah owes you 20€"));
        assert!(text.contains("You and Anthony are even!"));
        assert!(text.contains("[Close]"));
    }
}
