use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::db::Database;
use crate::ui::app::{App, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(db: &Database, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    app.refresh_all(db)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, plus table borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, db)?,
                InputMode::Command => handle_command_input(key, app, db)?,
                InputMode::Editing => handle_editing_input(key, app, db)?,
                InputMode::Confirm => handle_confirm_input(key, app, db)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, db, Screen::Dashboard)?,
        KeyCode::Char('2') => switch_screen(app, db, Screen::Holdings)?,
        KeyCode::Tab | KeyCode::BackTab => {
            // Two screens, so forward and backward cycling coincide
            let next = match app.screen {
                Screen::Dashboard => Screen::Holdings,
                Screen::Holdings => Screen::Dashboard,
            };
            switch_screen(app, db, next)?;
        }
        KeyCode::Char('g') => {
            if app.screen == Screen::Holdings {
                scroll_to_top(&mut app.holding_index, &mut app.holding_scroll);
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Holdings {
                let len = app.holdings.len();
                let page = app.holdings_page();
                scroll_to_bottom(
                    &mut app.holding_index,
                    &mut app.holding_scroll,
                    len,
                    page,
                );
            }
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.holdings_page() / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.holdings_page() / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('D') if app.screen == Screen::Holdings => {
            commands::handle_command("delete", app, db)?;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => handle_escape(app, db)?,
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, db)?;
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

fn handle_editing_input(key: event::KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            if let Some(id) = app.editing_id.take() {
                commands::finish_edit(id, &input, app, db)?;
            }
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.editing_id = None;
            app.input_mode = InputMode::Normal;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, db: &Database) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::DeleteHolding { id, ticker } => {
                        if db.delete_holding(id)? {
                            app.refresh_all(db)?;
                            app.set_status(format!("Deleted {ticker} lot (id {id})"));
                        } else {
                            app.set_status(format!("No holding with id {id}"));
                        }
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
        _ => {}
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, db: &Database, screen: Screen) -> Result<()> {
    app.screen = screen;
    match screen {
        Screen::Dashboard => app.refresh_dashboard(db)?,
        Screen::Holdings => app.refresh_holdings(db)?,
    }
    Ok(())
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Holdings {
        let len = app.holdings.len();
        let page = app.holdings_page();
        scroll_down(
            &mut app.holding_index,
            &mut app.holding_scroll,
            len,
            page,
        );
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Holdings {
        scroll_up(&mut app.holding_index, &mut app.holding_scroll);
    }
}

fn handle_escape(app: &mut App, db: &Database) -> Result<()> {
    if app.screen == Screen::Holdings && app.ticker_filter.is_some() {
        app.ticker_filter = None;
        app.holding_index = 0;
        app.holding_scroll = 0;
        app.refresh_holdings(db)?;
        app.set_status("Ticker filter cleared");
    } else {
        app.status_message.clear();
    }
    Ok(())
}
