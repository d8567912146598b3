use crate::model::ShoppingItem;

/// Requests from the view to the list model. Quantity travels as the raw
/// text the user typed; the model owns the parsing (and its defaults).
#[derive(Debug)]
pub enum Action {
    AddItem { name: String, quantity: String },
    BeginEdit(u32),
    CommitEdit { id: u32, name: String, quantity: String },
    DeleteItem(u32),
    Quit,
}

/// Notifications from the list model back to the view. The view never
/// mutates the list; it redraws from each `ItemsChanged` snapshot.
#[derive(Debug)]
pub enum AppEvent {
    ItemsChanged(Vec<ShoppingItem>),
    Status(String),
}
