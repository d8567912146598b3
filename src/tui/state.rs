use crate::model::ShoppingItem;
use ratatui::widgets::ListState;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    /// Add form, name field.
    AddingName,
    /// Add form, quantity field (name staged in `pending_name`).
    AddingQuantity,
    /// Inline editor, name field.
    EditingName,
    /// Inline editor, quantity field.
    EditingQuantity,
}

/// View-side state. Holds the latest item snapshot from the model plus the
/// transient form text and mode flags; the list itself lives in the model
/// task and is never mutated from here.
pub struct AppState {
    pub items: Vec<ShoppingItem>,
    pub list_state: ListState,
    pub message: String,
    pub mode: InputMode,
    pub input_buffer: String,
    pub cursor_position: usize,
    /// First form field, staged while the quantity field is active.
    pub pending_name: String,
    pub editing_id: Option<u32>,
    /// Pre-edit values, committed back when an edit is abandoned.
    pub original_name: String,
    pub original_quantity: String,
}

impl AppState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            items: vec![],
            list_state,
            message: "a: Add | e: Edit | d: Del | q: Quit".to_string(),
            mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            pending_name: String::new(),
            editing_id: None,
            original_name: String::new(),
            original_quantity: String::new(),
        }
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.input_buffer.insert(index, new_char);
        self.move_cursor_right();
    }
    // The cursor counts chars but `String::insert` takes bytes; past a
    // multibyte char the two diverge.
    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len())
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    /// Fill the active field, cursor at the end.
    pub fn set_input(&mut self, text: &str) {
        self.input_buffer = text.to_string();
        self.cursor_position = self.input_buffer.chars().count();
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }
    /// Display column of the cursor inside the input field. Wide glyphs
    /// occupy two cells, so this is not the char count.
    pub fn visual_cursor(&self) -> u16 {
        self.input_buffer
            .chars()
            .take(self.cursor_position)
            .map(|c| c.width().unwrap_or(0))
            .sum::<usize>() as u16
    }

    /// Drop all staged form text and return to normal mode.
    pub fn reset_form(&mut self) {
        self.reset_input();
        self.pending_name.clear();
        self.editing_id = None;
        self.original_name.clear();
        self.original_quantity.clear();
        self.mode = InputMode::Normal;
    }

    /// Replace the snapshot and keep the selection on a valid row.
    pub fn set_items(&mut self, items: Vec<ShoppingItem>) {
        self.items = items;
        let sel = self.list_state.selected().unwrap_or(0);
        if self.items.is_empty() {
            self.list_state.select(Some(0));
        } else if sel >= self.items.len() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }

    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.list_state.selected().and_then(|i| self.items.get(i))
    }

    pub fn next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.items.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        // Clamp to the last item (don't wrap around like next())
        let new_index = (current + step).min(self.items.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.items.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
