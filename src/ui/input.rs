use crate::ui::app::App;
use crate::ui::navigation::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    match app.current_route() {
        Route::MealList => handle_list_key(app, key),
        Route::MealDetail { .. } => handle_detail_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter => {
            app.open_selected_meal();
        }
        KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.back();
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail(1),
        KeyCode::PageUp => {
            let page = app.detail_page() as i32;
            app.scroll_detail(-page);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            let page = app.detail_page() as i32;
            app.scroll_detail(page);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
