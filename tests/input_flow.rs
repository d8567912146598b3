use cartui::model::ShoppingItem;
use cartui::tui::action::Action;
use cartui::tui::handle_key;
use cartui::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

fn press(state: &mut AppState, code: KeyCode) -> Option<Action> {
    handle_key(state, KeyEvent::from(code))
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        assert!(press(state, KeyCode::Char(c)).is_none());
    }
}

fn seeded_state() -> AppState {
    let mut state = AppState::new();
    state.set_items(vec![
        ShoppingItem::new(1, "Milk", 2),
        ShoppingItem::new(2, "Bread", 1),
    ]);
    state
}

#[test]
fn add_flow_stages_name_then_quantity() {
    let mut state = AppState::new();

    assert!(press(&mut state, KeyCode::Char('a')).is_none());
    assert_eq!(state.mode, InputMode::AddingName);

    type_text(&mut state, "Milk");
    assert!(press(&mut state, KeyCode::Enter).is_none());
    assert_eq!(state.mode, InputMode::AddingQuantity);
    assert_eq!(state.pending_name, "Milk");

    type_text(&mut state, "2");
    let action = press(&mut state, KeyCode::Enter);
    match action {
        Some(Action::AddItem { name, quantity }) => {
            assert_eq!(name, "Milk");
            assert_eq!(quantity, "2");
        }
        other => panic!("expected AddItem, got {:?}", other),
    }
    assert_eq!(state.mode, InputMode::Normal);
    assert!(state.input_buffer.is_empty());
}

#[test]
fn blank_name_keeps_add_form_open() {
    let mut state = AppState::new();
    press(&mut state, KeyCode::Char('a'));

    assert!(press(&mut state, KeyCode::Enter).is_none());
    assert_eq!(state.mode, InputMode::AddingName);

    type_text(&mut state, "   ");
    assert!(press(&mut state, KeyCode::Enter).is_none());
    assert_eq!(state.mode, InputMode::AddingName);
}

#[test]
fn escape_cancels_add_without_action() {
    let mut state = AppState::new();
    press(&mut state, KeyCode::Char('a'));
    type_text(&mut state, "Milk");

    assert!(press(&mut state, KeyCode::Esc).is_none());
    assert_eq!(state.mode, InputMode::Normal);
    assert!(state.input_buffer.is_empty());
}

#[test]
fn edit_flow_prefills_and_commits() {
    let mut state = seeded_state();

    let action = press(&mut state, KeyCode::Char('e'));
    assert!(matches!(action, Some(Action::BeginEdit(1))));
    assert_eq!(state.mode, InputMode::EditingName);
    assert_eq!(state.input_buffer, "Milk");

    // Keep the name, move to quantity; field is prefilled with "2".
    assert!(press(&mut state, KeyCode::Enter).is_none());
    assert_eq!(state.mode, InputMode::EditingQuantity);
    assert_eq!(state.input_buffer, "2");

    press(&mut state, KeyCode::Backspace);
    type_text(&mut state, "5");
    let action = press(&mut state, KeyCode::Enter);
    match action {
        Some(Action::CommitEdit { id, name, quantity }) => {
            assert_eq!(id, 1);
            assert_eq!(name, "Milk");
            assert_eq!(quantity, "5");
        }
        other => panic!("expected CommitEdit, got {:?}", other),
    }
    assert_eq!(state.mode, InputMode::Normal);
}

#[test]
fn escape_during_edit_commits_original_values() {
    let mut state = seeded_state();
    press(&mut state, KeyCode::Char('e'));
    type_text(&mut state, "xxx");

    let action = press(&mut state, KeyCode::Esc);
    match action {
        Some(Action::CommitEdit { id, name, quantity }) => {
            assert_eq!(id, 1);
            assert_eq!(name, "Milk");
            assert_eq!(quantity, "2");
        }
        other => panic!("expected revert CommitEdit, got {:?}", other),
    }
    assert_eq!(state.mode, InputMode::Normal);
}

#[test]
fn delete_targets_selected_row() {
    let mut state = seeded_state();
    state.next();

    let action = press(&mut state, KeyCode::Char('d'));
    assert!(matches!(action, Some(Action::DeleteItem(2))));
}

#[test]
fn edit_and_delete_are_noops_on_empty_list() {
    let mut state = AppState::new();
    assert!(press(&mut state, KeyCode::Char('e')).is_none());
    assert!(press(&mut state, KeyCode::Char('d')).is_none());
    assert_eq!(state.mode, InputMode::Normal);
}

#[test]
fn typing_after_multibyte_char_inserts_at_cursor() {
    let mut state = AppState::new();
    press(&mut state, KeyCode::Char('a'));
    type_text(&mut state, "café");
    assert_eq!(state.input_buffer, "café");

    // Appending after the accent must not split a char boundary.
    press(&mut state, KeyCode::Char('s'));
    assert_eq!(state.input_buffer, "cafés");

    // Mid-buffer insert with the cursor sitting before the accent.
    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Char('f'));
    assert_eq!(state.input_buffer, "caffés");
}

#[test]
fn editing_multibyte_name_extends_the_buffer() {
    let mut state = AppState::new();
    state.set_items(vec![ShoppingItem::new(1, "Käse", 2)]);

    press(&mut state, KeyCode::Char('e'));
    assert_eq!(state.input_buffer, "Käse");
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.input_buffer, "Käsen");

    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Backspace);
    assert_eq!(state.input_buffer, "Käs");
}

#[test]
fn visual_cursor_uses_display_width() {
    let mut state = AppState::new();
    state.set_input("日本");
    // Two double-width glyphs, cursor at the end.
    assert_eq!(state.visual_cursor(), 4);
    state.move_cursor_left();
    assert_eq!(state.visual_cursor(), 2);

    state.set_input("café");
    assert_eq!(state.visual_cursor(), 4);
}

#[test]
fn q_quits_from_normal_mode_only() {
    let mut state = AppState::new();
    assert!(matches!(press(&mut state, KeyCode::Char('q')), Some(Action::Quit)));

    press(&mut state, KeyCode::Char('a'));
    // In a form, q is just a character.
    assert!(press(&mut state, KeyCode::Char('q')).is_none());
    assert_eq!(state.input_buffer, "q");
}
