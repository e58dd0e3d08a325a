//! TUI Views module
//!
//! The ledger table, the totals panel and the status bar.

pub mod ledger;
pub mod status_bar;
pub mod totals;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    ledger::render(frame, app, layout.ledger);
    totals::render(frame, app, layout.totals);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Prompt(kind) => dialogs::prompt::render(frame, app, kind),
        ActiveDialog::ConfirmDeleteCategory(c) => dialogs::confirm::render(frame, app, c),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::{BudgetSession, LedgerCommand};
    use crate::tui::app::PromptKind;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_main_screen() {
        let settings = Settings::default();
        let mut session = BudgetSession::new();
        session.set_income("2000");
        session.apply(LedgerCommand::SetValue {
            category: 0,
            sub: 0,
            value: "1200".into(),
        });
        let mut app = App::new(session, &settings);

        let text = screen(&mut app, 120, 40);

        assert!(text.contains("My Monthly Budget"));
        assert!(text.contains("Housing"));
        assert!(text.contains("Rent"));
        assert!(text.contains("Total Spent"));
        assert!(text.contains("$1,200.00"));
        assert!(text.contains("Total Left"));
        assert!(text.contains("$800.00"));
        assert!(text.contains("60% of income spent"));
    }

    #[test]
    fn test_render_empty_ledger() {
        let settings = Settings::default();
        let mut app = App::new(
            BudgetSession::with_ledger(crate::models::Ledger::new()),
            &settings,
        );

        let text = screen(&mut app, 100, 30);
        assert!(text.contains("No categories yet."));
        assert!(text.contains("Nothing spent yet."));
        assert!(text.contains("No income set"));
    }

    #[test]
    fn test_render_dialogs() {
        let settings = Settings::default();
        let mut app = App::new(BudgetSession::new(), &settings);

        app.open_dialog(ActiveDialog::Prompt(PromptKind::Export));
        assert!(screen(&mut app, 100, 30).contains("Formats: csv, sheet, document, json, yaml"));

        app.open_dialog(ActiveDialog::ConfirmDeleteCategory(0));
        let text = screen(&mut app, 100, 30);
        assert!(text.contains("Delete 'Housing'?"));
        assert!(text.contains("Its 4 subcategories ($0.00) go with it."));

        app.open_dialog(ActiveDialog::Help);
        assert!(screen(&mut app, 100, 40).contains("Set monthly income"));
    }
}
