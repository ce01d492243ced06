//! Item Actions
//!
//! Delete, edit and detail operations for rows of a to-do list.
//! Network, navigation and node removal go through the seams in
//! [`client`], [`navigator`] and [`nodes`], with browser-backed
//! implementations in [`browser`].

pub mod actions;
pub mod browser;
pub mod client;
pub mod error;
pub mod id;
pub mod models;
pub mod navigator;
pub mod nodes;
pub mod routes;

pub use actions::ItemActions;
pub use browser::{DomNodes, FetchClient, LocationNavigator};
pub use client::{HttpClient, HttpResponse, Method};
pub use error::{ActionError, ActionResult};
pub use id::ItemId;
pub use models::TodoItem;
pub use navigator::Navigator;
pub use nodes::ItemNodes;
pub use routes::Routes;

#[cfg(test)]
pub(crate) mod testing;
