//! Server-Rendered Rows
//!
//! Wires a list rendered by the server to the item actions with one
//! delegated click listener. The list container carries `data-todo-list`,
//! rows carry `data-item-id`, buttons carry `data-action` (`delete`,
//! `edit`, `detail` or `new`).

use std::rc::Rc;

use item_actions::browser::ITEM_ID_ATTR;
use item_actions::{ActionError, ActionResult, DomNodes, FetchClient, ItemActions, ItemId, LocationNavigator};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::config::AppConfig;

const ACTION_ATTR: &str = "data-action";
/// Marks a page whose list is rendered by the server, even when empty
pub const LIST_ATTR: &str = "data-todo-list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    /// Server markup is already on the page
    ServerRendered,
    /// Empty shell, the app renders the list
    App,
}

impl HostMode {
    pub fn from_page(has_list_marker: bool, server_rows: u32) -> Self {
        if has_list_marker || server_rows > 0 {
            HostMode::ServerRendered
        } else {
            HostMode::App
        }
    }

    pub fn detect() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return HostMode::App;
        };
        let has_marker = document
            .query_selector(&format!("[{}]", LIST_ATTR))
            .ok()
            .flatten()
            .is_some();
        let rows = document
            .query_selector_all(&format!("[{}]", ITEM_ID_ATTR))
            .map(|list| list.length())
            .unwrap_or(0);
        Self::from_page(has_marker, rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Edit,
    Detail,
    New,
}

impl RowAction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "delete" => Some(RowAction::Delete),
            "edit" => Some(RowAction::Edit),
            "detail" => Some(RowAction::Detail),
            "new" => Some(RowAction::New),
            _ => None,
        }
    }
}

pub fn bind(config: AppConfig) -> ActionResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ActionError::Navigation("no document".to_string()))?;

    let nodes = Rc::new(DomNodes::collect(&document)?);
    let actions = Rc::new(ItemActions::new(FetchClient, LocationNavigator).with_routes(config.routes));
    log::info!("[ENHANCE] Bound {} server-rendered rows", nodes.len());

    let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
        let Some(button) = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|t| t.closest(&format!("[{}]", ACTION_ATTR)).ok().flatten())
        else {
            return;
        };
        let Some(action) = button.get_attribute(ACTION_ATTR).as_deref().and_then(RowAction::parse) else {
            return;
        };
        ev.prevent_default();

        match (action, row_id(&button)) {
            (RowAction::New, _) => report(actions.new_item()),
            (_, None) => log::warn!("[ENHANCE] {:?} button outside of any row", action),
            (RowAction::Edit, Some(id)) => report(actions.edit_item(&id)),
            (RowAction::Detail, Some(id)) => report(actions.goto_detail(&id)),
            (RowAction::Delete, Some(id)) => {
                let actions = Rc::clone(&actions);
                let nodes = Rc::clone(&nodes);
                wasm_bindgen_futures::spawn_local(async move {
                    report(actions.delete_item(&id, nodes.as_ref()).await);
                });
            }
        }
    });

    document
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| ActionError::Navigation(format!("{:?}", e)))?;
    // Listener lives as long as the page
    handler.forget();
    Ok(())
}

fn row_id(button: &Element) -> Option<ItemId> {
    let row = button.closest(&format!("[{}]", ITEM_ID_ATTR)).ok().flatten()?;
    ItemId::parse(&row.get_attribute(ITEM_ID_ATTR)?).ok()
}

/// Failures are shown to the user, not swallowed
fn report(result: ActionResult<()>) {
    if let Err(e) = result {
        log::error!("[ENHANCE] {}", e);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&e.to_string());
        }
    }
}
