mod finding;
mod formatter;

pub use finding::Finding;
pub use formatter::{FileInventory, InventoryDocument, OutputFormatter};
