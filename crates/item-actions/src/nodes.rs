//! Rendered Item Nodes
//!
//! Explicit mapping from item id to the node that displays it.

use crate::id::ItemId;

pub trait ItemNodes {
    /// Remove the node for `id`. Returns false if nothing was mapped.
    fn remove(&self, id: &ItemId) -> bool;
}
