//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog, or to the ledger table when
//! no dialog is open.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, PromptKind};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::Help => {
            app.close_dialog();
            Ok(())
        }
        ActiveDialog::ConfirmDeleteCategory(_) => handle_confirm_key(app, key),
        ActiveDialog::Prompt(_) => handle_prompt_key(app, key),
    }
}

/// Handle keys when no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // Ledger editing
        KeyCode::Char('c') => app.open_dialog(ActiveDialog::Prompt(PromptKind::AddCategory)),
        KeyCode::Char('a') => app.add_subcategory_to_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected_value(),
        KeyCode::Char('r') => app.rename_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('i') => app.open_dialog(ActiveDialog::Prompt(PromptKind::Income)),
        KeyCode::Char('x') => app.open_dialog(ActiveDialog::Prompt(PromptKind::Export)),

        _ => {}
    }

    Ok(())
}

/// Handle keys in the delete confirmation
fn handle_confirm_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while typing into a prompt
fn handle_prompt_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }
    Ok(())
}
