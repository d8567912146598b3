pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::model::ShoppingList;
use action::{Action, AppEvent};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
            MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use state::{AppState, InputMode};
use std::{io, time::Duration};
use tokio::sync::mpsc;
use tracing::{error, info};

pub async fn run() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let _log_guard = crate::logging::init(&config);

    // Panic hook: raw mode eats the default output, so log it too.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!("panic: {info}");
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new();
    let (action_tx, action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    // The list lives in its own task; the UI only ever sees snapshots.
    tokio::spawn(run_model(ShoppingList::new(), action_rx, event_tx));

    let tick = Duration::from_millis(config.tick_rate_ms);
    loop {
        terminal.draw(|f| view::draw(f, &mut app_state))?;

        while let Ok(app_event) = event_rx.try_recv() {
            match app_event {
                AppEvent::ItemsChanged(items) => app_state.set_items(items),
                AppEvent::Status(msg) => app_state.message = msg,
            }
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                },
                Event::Key(key) => {
                    if let Some(action) = handle_key(&mut app_state, key) {
                        let quit = matches!(action, Action::Quit);
                        let _ = action_tx.send(action).await;
                        if quit {
                            break;
                        }
                    }
                }
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    if config.mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    Ok(())
}

/// Owns the shopping list and applies actions in arrival order. After every
/// mutation it emits a fresh snapshot; the view redraws from that and never
/// touches the list itself.
pub async fn run_model(
    mut list: ShoppingList,
    mut actions: mpsc::Receiver<Action>,
    events: mpsc::Sender<AppEvent>,
) {
    while let Some(action) = actions.recv().await {
        match action {
            Action::AddItem { name, quantity } => match list.add(&name, &quantity) {
                Some(id) => {
                    info!(id, "item added");
                    let _ = events
                        .send(AppEvent::ItemsChanged(list.items().to_vec()))
                        .await;
                    let _ = events
                        .send(AppEvent::Status(format!("Added {}.", name.trim())))
                        .await;
                }
                None => {
                    let _ = events
                        .send(AppEvent::Status("Item name cannot be empty.".to_string()))
                        .await;
                }
            },
            Action::BeginEdit(id) => {
                list.begin_edit(id);
                let _ = events
                    .send(AppEvent::ItemsChanged(list.items().to_vec()))
                    .await;
            }
            Action::CommitEdit { id, name, quantity } => {
                list.commit_edit(id, &name, &quantity);
                info!(id, "item saved");
                let _ = events
                    .send(AppEvent::ItemsChanged(list.items().to_vec()))
                    .await;
                let _ = events.send(AppEvent::Status("Saved.".to_string())).await;
            }
            Action::DeleteItem(id) => {
                let existed = list.get(id).is_some();
                list.delete(id);
                if existed {
                    info!(id, "item deleted");
                }
                let _ = events
                    .send(AppEvent::ItemsChanged(list.items().to_vec()))
                    .await;
                let _ = events.send(AppEvent::Status("Deleted.".to_string())).await;
            }
            Action::Quit => break,
        }
    }
}

/// Maps one key event onto the current mode. Mutates only the view-side
/// form state; any list mutation comes back as the returned `Action`.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<Action> {
    match state.mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('a') => {
                state.reset_form();
                state.mode = InputMode::AddingName;
                state.message = "Enter: next field | Esc: cancel".to_string();
                None
            }
            KeyCode::Char('e') => {
                let (id, name, quantity) = state
                    .selected_item()
                    .map(|i| (i.id, i.name.clone(), i.quantity.to_string()))?;
                state.reset_form();
                state.editing_id = Some(id);
                state.original_name = name.clone();
                state.original_quantity = quantity;
                state.set_input(&name);
                state.mode = InputMode::EditingName;
                Some(Action::BeginEdit(id))
            }
            KeyCode::Char('d') => {
                let id = state.selected_item()?.id;
                Some(Action::DeleteItem(id))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.previous();
                None
            }
            KeyCode::PageDown => {
                state.jump_forward(10);
                None
            }
            KeyCode::PageUp => {
                state.jump_backward(10);
                None
            }
            _ => None,
        },

        InputMode::AddingName => match key.code {
            KeyCode::Enter => {
                // Blank name never reaches the model; the form stays open.
                if state.input_buffer.trim().is_empty() {
                    state.message = "Item name cannot be empty.".to_string();
                } else {
                    state.pending_name = std::mem::take(&mut state.input_buffer);
                    state.reset_input();
                    state.mode = InputMode::AddingQuantity;
                }
                None
            }
            KeyCode::Esc => {
                state.reset_form();
                None
            }
            code => {
                edit_buffer(state, code);
                None
            }
        },

        InputMode::AddingQuantity => match key.code {
            KeyCode::Enter => {
                let action = Action::AddItem {
                    name: std::mem::take(&mut state.pending_name),
                    quantity: std::mem::take(&mut state.input_buffer),
                };
                state.reset_form();
                Some(action)
            }
            KeyCode::Esc => {
                state.reset_form();
                None
            }
            code => {
                edit_buffer(state, code);
                None
            }
        },

        InputMode::EditingName => match key.code {
            KeyCode::Enter => {
                state.pending_name = std::mem::take(&mut state.input_buffer);
                let quantity = state.original_quantity.clone();
                state.set_input(&quantity);
                state.mode = InputMode::EditingQuantity;
                None
            }
            KeyCode::Esc => abandon_edit(state),
            code => {
                edit_buffer(state, code);
                None
            }
        },

        InputMode::EditingQuantity => match key.code {
            KeyCode::Enter => {
                let id = state.editing_id?;
                let action = Action::CommitEdit {
                    id,
                    name: std::mem::take(&mut state.pending_name),
                    quantity: std::mem::take(&mut state.input_buffer),
                };
                state.reset_form();
                Some(action)
            }
            KeyCode::Esc => abandon_edit(state),
            code => {
                edit_buffer(state, code);
                None
            }
        },
    }
}

fn edit_buffer(state: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Char(c) => state.enter_char(c),
        KeyCode::Backspace => state.delete_char(),
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        _ => {}
    }
}

// There is no cancel operation on the list, so an abandoned edit commits
// the pre-edit values back; that clears the item's edit flag unchanged.
fn abandon_edit(state: &mut AppState) -> Option<Action> {
    let id = state.editing_id?;
    let action = Action::CommitEdit {
        id,
        name: state.original_name.clone(),
        quantity: state.original_quantity.clone(),
    };
    state.reset_form();
    Some(action)
}
