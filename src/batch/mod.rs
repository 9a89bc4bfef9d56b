//! Batch operations
//!
//! Applies delete/move/copy/rename to lists of named items. Each item is
//! processed independently: one failure is recorded and the batch moves on
//! to the next item. A batch is never atomic and never rolled back.

mod operations;
mod results;

pub use operations::{copy_all, delete_all, move_all, rename_one};
pub use results::{BatchResult, Item, ItemKind, ItemReport};
