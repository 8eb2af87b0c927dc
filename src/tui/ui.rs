use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    AddFriendFormView, FriendList, SearchBox, SplitBillFormView, TitleBar,
};
use crate::tui::{Focus, TuiState};

/// Screen layout:
///
/// ```text
/// ┌ title ─────────────────────────────────────────┐
/// │ search box          │ friends                  │
/// │ results             │ [add friend form]        │
/// │                     │ [split bill form]        │
/// └ help ──────────────────────────────────────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};

    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [search_area, ledger_area] =
        Layout::horizontal([Percentage(45), Percentage(55)]).areas(body_area);

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    SearchBox::new(
        &mut tui.search_box,
        &app.search,
        tui.focus == Focus::Search,
        spinner_frame,
    )
    .render(frame, search_area);

    draw_ledger(frame, ledger_area, app, tui);

    let help = Line::from(" Tab Focus  Ctrl+A Add friend  Esc Friends  Ctrl+C Quit ")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn draw_ledger(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let selected = app.ledger.selected_friend();
    let add_height = if app.ledger.show_add_form {
        AddFriendFormView::HEIGHT
    } else {
        0
    };
    let split_height = if selected.is_some() {
        SplitBillFormView::HEIGHT
    } else {
        0
    };

    let [list_area, add_area, split_area] =
        Layout::vertical([Min(0), Length(add_height), Length(split_height)]).areas(area);

    FriendList::new(
        &mut tui.friend_list,
        &app.ledger.friends,
        app.ledger.selected.as_deref(),
        &app.currency,
        tui.focus == Focus::Friends,
    )
    .render(frame, list_area);

    if app.ledger.show_add_form {
        AddFriendFormView::new(&tui.add_friend, tui.focus == Focus::AddFriend)
            .render(frame, add_area);
    }

    if let Some(friend) = selected {
        SplitBillFormView::new(&tui.split_bill, &friend.name, tui.focus == Focus::SplitBill)
            .render(frame, split_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_forms_hidden_by_default() {
        let app = test_app();
        let mut tui = TuiState::new(app.ledger.friends.len());
        let text = screen(&app, &mut tui);
        assert!(text.contains("Friends"));
        assert!(text.contains("Search movies"));
        assert!(!text.contains("Friend name"));
        assert!(!text.contains("Split a bill"));
    }

    #[test]
    fn test_selection_shows_split_form() {
        let mut app = test_app();
        update(&mut app, Action::SelectFriend("118836".to_string()));
        let mut tui = TuiState::new(app.ledger.friends.len());
        let text = screen(&app, &mut tui);
        assert!(text.contains("Split a bill with Clark"));
    }

    #[test]
    fn test_add_form_shown_when_open() {
        let mut app = test_app();
        update(&mut app, Action::ToggleAddFriendForm);
        let mut tui = TuiState::new(app.ledger.friends.len());
        let text = screen(&app, &mut tui);
        assert!(text.contains("Friend name"));
    }
}
