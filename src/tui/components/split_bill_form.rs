//! # SplitBillForm Component
//!
//! Shown while a friend is selected. Fields: bill value, your expense, the
//! friend's share (read-only, derived) and who paid. Up/Down move between
//! editable fields, Left/Right flip the payer, Enter submits.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::forms::{Payer, SplitBillForm};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::search_box::focus_style;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitField {
    Bill,
    Expense,
    Payer,
}

impl SplitField {
    fn next(self) -> Self {
        match self {
            SplitField::Bill => SplitField::Expense,
            SplitField::Expense => SplitField::Payer,
            SplitField::Payer => SplitField::Bill,
        }
    }

    fn prev(self) -> Self {
        match self {
            SplitField::Bill => SplitField::Payer,
            SplitField::Expense => SplitField::Bill,
            SplitField::Payer => SplitField::Expense,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplitBillEvent {
    /// Signed amount to add to the selected friend's balance.
    Split(f64),
}

pub struct SplitBillFormState {
    pub form: SplitBillForm,
    pub field: SplitField,
}

impl SplitBillFormState {
    pub fn new() -> Self {
        Self {
            form: SplitBillForm::default(),
            field: SplitField::Bill,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn edit(&mut self, f: impl FnOnce(&mut String)) {
        let mut text = match self.field {
            SplitField::Bill => self.form.bill_text().to_string(),
            SplitField::Expense => self.form.expense_text().to_string(),
            SplitField::Payer => return,
        };
        f(&mut text);
        // Rejected edits leave the field as it was.
        match self.field {
            SplitField::Bill => self.form.set_bill(&text),
            SplitField::Expense => self.form.set_expense(&text),
            SplitField::Payer => false,
        };
    }
}

impl Default for SplitBillFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for SplitBillFormState {
    type Event = SplitBillEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let c = *c;
                self.edit(|text| text.push(c));
                None
            }
            TuiEvent::Backspace => {
                self.edit(|text| {
                    text.pop();
                });
                None
            }
            TuiEvent::CursorDown => {
                self.field = self.field.next();
                None
            }
            TuiEvent::CursorUp => {
                self.field = self.field.prev();
                None
            }
            TuiEvent::CursorLeft | TuiEvent::CursorRight if self.field == SplitField::Payer => {
                self.form.payer = self.form.payer.toggle();
                None
            }
            TuiEvent::Submit => self.form.submit().map(SplitBillEvent::Split),
            _ => None,
        }
    }
}

/// Transient render wrapper for the split-bill form.
pub struct SplitBillFormView<'a> {
    state: &'a SplitBillFormState,
    friend_name: &'a str,
    focused: bool,
}

impl<'a> SplitBillFormView<'a> {
    pub fn new(state: &'a SplitBillFormState, friend_name: &'a str, focused: bool) -> Self {
        Self {
            state,
            friend_name,
            focused,
        }
    }

    pub const HEIGHT: u16 = 6;
}

impl Component for SplitBillFormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(focus_style(self.focused))
            .title(format!(" Split a bill with {} ", self.friend_name))
            .title_bottom(Line::from(" ←/→ Payer  Enter Split ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1); 4]).split(inner);
        let form = &self.state.form;
        let share = form.friend_share().map(|s| s.to_string()).unwrap_or_default();
        let friend_label = format!("{}'s expense ", self.friend_name);
        let payer = match form.payer {
            Payer::User => "You".to_string(),
            Payer::Friend => self.friend_name.to_string(),
        };

        let label_width = friend_label.width().max("Who is paying ".width());
        let fields: [(Option<SplitField>, &str, String); 4] = [
            (Some(SplitField::Bill), "Bill value ", form.bill_text().to_string()),
            (Some(SplitField::Expense), "Your expense ", form.expense_text().to_string()),
            (None, friend_label.as_str(), share),
            (Some(SplitField::Payer), "Who is paying ", format!("◀ {payer} ▶")),
        ];

        for ((field, label, value), row) in fields.into_iter().zip(rows.iter()) {
            let active = self.focused && field == Some(self.state.field);
            let label_style = if active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value_style = if field.is_none() {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
            };

            let padded_label = format!("{:<width$}", label, width = label_width);
            if active && field != Some(SplitField::Payer) {
                let x = row.x + (label_width + value.width()) as u16;
                frame.set_cursor_position((x.min(row.right().saturating_sub(1)), row.y));
            }
            let line = Line::from(vec![
                Span::styled(padded_label, label_style),
                Span::styled(value, value_style),
            ]);
            frame.render_widget(Paragraph::new(line), *row);
        }
    }
}
