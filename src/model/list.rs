use crate::model::ShoppingItem;

/// The in-memory shopping list. Owns the items for the lifetime of the
/// screen; insertion order is display order.
///
/// Every operation is synchronous and total: malformed input is coerced to
/// a default (quantity) or turns the call into a no-op (blank name, unknown
/// id). Nothing here returns an error.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// The item currently in edit mode, if any.
    pub fn editing(&self) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.is_editing)
    }

    /// Appends a new item and returns its id, or `None` when the name is
    /// blank after trimming (the add form stays open in that case). The name
    /// is stored as typed; unparsable quantity text defaults to 0.
    pub fn add(&mut self, name: &str, quantity_text: &str) -> Option<u32> {
        if name.trim().is_empty() {
            return None;
        }
        let id = self.next_id();
        self.items
            .push(ShoppingItem::new(id, name, parse_quantity(quantity_text, 0)));
        Some(id)
    }

    /// Puts the matching item into edit mode and takes every other item out
    /// of it. No-op when `id` is absent.
    pub fn begin_edit(&mut self, id: u32) {
        if self.get(id).is_none() {
            return;
        }
        for item in &mut self.items {
            item.is_editing = item.id == id;
        }
    }

    /// Overwrites the matching item's name and quantity and leaves edit
    /// mode. Unparsable quantity text defaults to 1 here, not 0; the
    /// asymmetry with `add` is inherited behavior. No-op when `id` is absent.
    pub fn commit_edit(&mut self, id: u32, name: &str, quantity_text: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.name = name.to_string();
            item.quantity = parse_quantity(quantity_text, 1);
            item.is_editing = false;
        }
    }

    /// Removes the matching item. No-op when `id` is absent.
    pub fn delete(&mut self, id: u32) {
        self.items.retain(|i| i.id != id);
    }

    // Max existing id + 1, so a deleted max id can be handed out again.
    fn next_id(&self) -> u32 {
        self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }
}

fn parse_quantity(text: &str, fallback: u32) -> u32 {
    text.trim().parse().unwrap_or(fallback)
}
