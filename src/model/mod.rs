pub mod item;
pub mod list;

pub use item::ShoppingItem;
pub use list::ShoppingList;
