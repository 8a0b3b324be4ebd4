use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::AppConfig;
use crate::ui::app::{App, Field, Focus, InputMode};
use crate::ui::commands;

pub(crate) fn as_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);
    tracing::info!(dark = config.dark_mode, "starting tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // header, status, command bars plus the income box and list borders
            let content_height = f.area().height.saturating_sub(8) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(key, app)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => app.running = false,
            KeyCode::Char('t') => app.toggle_theme(),
            _ => {}
        }
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Command => handle_command_input(key, app),
        InputMode::Editing => {
            handle_editing_input(key, app);
            Ok(())
        }
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App) -> Result<()> {
    if app.focus == Focus::Expenses && app.ledger.pending_delete().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.confirm_delete();
                return Ok(());
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.cancel_delete();
                return Ok(());
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        _ => match app.focus {
            Focus::Income => handle_income_input(key, app),
            Focus::Expenses => handle_expense_input(key, app),
        },
    }
    Ok(())
}

fn handle_income_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_income(),
        KeyCode::Backspace => app.income_pop(),
        KeyCode::Esc => {
            app.clear_income_input();
            app.status_message.clear();
        }
        KeyCode::Char(c) => app.income_push(c),
        _ => {}
    }
}

fn handle_expense_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => app.goto_top(),
        KeyCode::Char('G') => app.goto_bottom(),
        KeyCode::Char('a') => app.add_expense(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('q') => app.running = false,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.end_edit(),
        KeyCode::Tab => app.next_field(),
        KeyCode::Backspace => app.edit_pop(),
        KeyCode::Left if app.edit_field == Field::Category => app.cycle_category(false),
        KeyCode::Right if app.edit_field == Field::Category => app.cycle_category(true),
        KeyCode::Char(c) => app.edit_push(c),
        _ => {}
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
