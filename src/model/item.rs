/// A single shopping list entry.
///
/// `quantity` is non-negative by construction; textual input that does not
/// parse as a `u32` never reaches this struct (the list coerces it first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    /// Row renders as an inline editor while set. The list guarantees at
    /// most one item carries this flag.
    pub is_editing: bool,
}

impl ShoppingItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            is_editing: false,
        }
    }
}
