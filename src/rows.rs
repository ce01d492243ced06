//! Row Store
//!
//! Rendered rows keyed by item id; removal on successful delete.

use item_actions::{ItemId, ItemNodes, TodoItem};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct RowStore {
    pub rows: RwSignal<Vec<TodoItem>>,
}

impl RowStore {
    pub fn new() -> Self {
        Self { rows: RwSignal::new(Vec::new()) }
    }
}

impl ItemNodes for RowStore {
    fn remove(&self, id: &ItemId) -> bool {
        let present = self.rows.with_untracked(|rows| rows.iter().any(|r| &r.item_id() == id));
        if present {
            self.rows.update(|rows| {
                remove_row(rows, id);
            });
        }
        present
    }
}

/// Drop the row for `id`, leaving every other row in place
pub fn remove_row(rows: &mut Vec<TodoItem>, id: &ItemId) -> bool {
    let before = rows.len();
    rows.retain(|r| &r.item_id() != id);
    rows.len() != before
}
