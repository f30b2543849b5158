use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::store::ExpenseStore;
use crate::ui::app::{App, InputMode};
use crate::ui::form::FormField;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &mut ExpenseStore) -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

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
    store: &mut ExpenseStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Header (5) + table borders/header (3) + status bar (1)
            let content_height = f.area().height.saturating_sub(9) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, store);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store),
                InputMode::Adding => handle_adding_input(key, app, store),
                InputMode::Confirm => handle_confirm_input(key, app, store),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) {
    let len = store.expenses().len();
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            scroll_down(
                &mut app.expense_index,
                &mut app.expense_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.expense_index, &mut app.expense_scroll);
        }
        KeyCode::Char('g') => {
            scroll_to_top(&mut app.expense_index, &mut app.expense_scroll);
        }
        KeyCode::Char('G') => {
            scroll_to_bottom(
                &mut app.expense_index,
                &mut app.expense_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                scroll_down(
                    &mut app.expense_index,
                    &mut app.expense_scroll,
                    len,
                    app.visible_rows,
                );
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                scroll_up(&mut app.expense_index, &mut app.expense_scroll);
            }
        }
        KeyCode::Char('a') => {
            app.form.reset();
            app.input_mode = InputMode::Adding;
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            if let Some(expense) = store.expenses().get(app.expense_index) {
                app.confirm_message = format!("Delete '{}'?", expense.title);
                app.pending_delete = Some((expense.id, expense.title.clone()));
                app.input_mode = InputMode::Confirm;
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
}

fn handle_adding_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) {
    match key.code {
        KeyCode::Esc => {
            app.form.reset();
            app.input_mode = InputMode::Normal;
            app.set_status("Add cancelled");
        }
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Left if app.form.focused == FormField::Category => app.form.cycle_category(-1),
        KeyCode::Right if app.form.focused == FormField::Category => app.form.cycle_category(1),
        KeyCode::Char('+') | KeyCode::Char('=') if app.form.focused == FormField::Category => {
            app.form.cycle_category(1);
        }
        KeyCode::Char('-') if app.form.focused == FormField::Category => {
            app.form.cycle_category(-1);
        }
        KeyCode::Enter => {
            if let Some(draft) = app.form.submit() {
                let title = draft.title.clone();
                store.add(draft);
                app.input_mode = InputMode::Normal;
                app.expense_index = 0;
                app.expense_scroll = 0;
                app.set_status(format!("Added: {title}"));
            }
        }
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) => app.form.input(c),
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, store: &mut ExpenseStore) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some((id, title)) = app.pending_delete.take() {
                store.delete(id);
                app.clamp_selection(store.expenses().len());
                app.set_status(format!("Deleted: {title}"));
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_delete = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
}
