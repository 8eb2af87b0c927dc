//! # AddFriendForm Component
//!
//! Two text fields (name, image URL). Up/Down switch fields, Enter submits.
//! An incomplete form is silently ignored on submit.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::forms::AddFriendForm;
use crate::core::ledger::Friend;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::search_box::focus_style;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFriendField {
    Name,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddFriendEvent {
    Submit(Friend),
}

pub struct AddFriendFormState {
    pub form: AddFriendForm,
    pub field: AddFriendField,
}

impl AddFriendFormState {
    pub fn new() -> Self {
        Self {
            form: AddFriendForm::default(),
            field: AddFriendField::Name,
        }
    }

    fn active_text(&mut self) -> &mut String {
        match self.field {
            AddFriendField::Name => &mut self.form.name,
            AddFriendField::Image => &mut self.form.image,
        }
    }
}

impl Default for AddFriendFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for AddFriendFormState {
    type Event = AddFriendEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.active_text().push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                self.active_text().push_str(text.trim());
                None
            }
            TuiEvent::Backspace => {
                self.active_text().pop();
                None
            }
            TuiEvent::CursorUp | TuiEvent::CursorDown => {
                self.field = match self.field {
                    AddFriendField::Name => AddFriendField::Image,
                    AddFriendField::Image => AddFriendField::Name,
                };
                None
            }
            TuiEvent::Submit => {
                let friend = self.form.submit()?;
                self.field = AddFriendField::Name;
                Some(AddFriendEvent::Submit(friend))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the add-friend form.
pub struct AddFriendFormView<'a> {
    state: &'a AddFriendFormState,
    focused: bool,
}

impl<'a> AddFriendFormView<'a> {
    pub fn new(state: &'a AddFriendFormState, focused: bool) -> Self {
        Self { state, focused }
    }

    pub const HEIGHT: u16 = 4;
}

impl Component for AddFriendFormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(focus_style(self.focused))
            .title(" Add friend ")
            .title_bottom(Line::from(" Enter Add ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
        let fields = [
            (AddFriendField::Name, "Friend name ", &self.state.form.name),
            (AddFriendField::Image, "Image URL   ", &self.state.form.image),
        ];

        for ((field, label, value), row) in fields.into_iter().zip(rows.iter()) {
            let active = self.focused && field == self.state.field;
            let label_style = if active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            let line = Line::from(vec![
                Span::styled(label, label_style),
                Span::raw(value.as_str()),
            ]);
            frame.render_widget(Paragraph::new(line), *row);

            if active {
                let x = row.x + (label.width() + value.width()) as u16;
                frame.set_cursor_position((x.min(row.right().saturating_sub(1)), row.y));
            }
        }
    }
}
