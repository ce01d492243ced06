//! Item Actions
//!
//! Stateless operations behind the delete, edit and detail buttons of a
//! to-do row. Each call is independent; the client and navigator are
//! passed in rather than shared process-wide.

use crate::client::{HttpClient, Method};
use crate::error::{ActionError, ActionResult};
use crate::id::ItemId;
use crate::models::{decode_list, TodoItem};
use crate::navigator::Navigator;
use crate::nodes::ItemNodes;
use crate::routes::Routes;

#[derive(Debug, Clone)]
pub struct ItemActions<C, N> {
    client: C,
    navigator: N,
    routes: Routes,
}

impl<C: HttpClient, N: Navigator> ItemActions<C, N> {
    pub fn new(client: C, navigator: N) -> Self {
        Self { client, navigator, routes: Routes::default() }
    }

    pub fn with_routes(mut self, routes: Routes) -> Self {
        self.routes = routes;
        self
    }

    /// Delete an item on the server, then remove its node.
    ///
    /// The node is touched only after a 2xx response. Any failure is
    /// returned to the caller and leaves `nodes` unchanged.
    pub async fn delete_item(&self, id: &ItemId, nodes: &impl ItemNodes) -> ActionResult<()> {
        let url = self.routes.delete_url(id);
        log::debug!("[ACTIONS] DELETE {}", url);

        let response = self.client.send(Method::Delete, &url).await.map_err(|e| {
            log::error!("[ACTIONS] Delete of item {} failed: {}", id, e);
            e
        })?;

        if !response.is_success() {
            let err = ActionError::from_status(response.status, &response.body);
            log::error!("[ACTIONS] Delete of item {} rejected: {}", id, err);
            return Err(err);
        }

        if !nodes.remove(id) {
            log::warn!("[ACTIONS] Item {} deleted but no node is mapped for it", id);
        }
        log::info!("[ACTIONS] Deleted item {}", id);
        Ok(())
    }

    pub fn edit_item(&self, id: &ItemId) -> ActionResult<()> {
        self.go(&self.routes.edit_url(id))
    }

    pub fn goto_detail(&self, id: &ItemId) -> ActionResult<()> {
        self.go(&self.routes.detail_url(id))
    }

    pub fn new_item(&self) -> ActionResult<()> {
        let url = self.routes.new_page.clone();
        self.go(&url)
    }

    /// Fetch every entry from the collection endpoint.
    pub async fn list_items(&self) -> ActionResult<Vec<TodoItem>> {
        let url = self.routes.list_url();
        let response = self.client.send(Method::Get, &url).await?;
        if !response.is_success() {
            return Err(ActionError::from_status(response.status, &response.body));
        }
        let items = decode_list(&response.body).map_err(|e| ActionError::Decode(e.to_string()))?;
        log::debug!("[ACTIONS] Loaded {} items", items.len());
        Ok(items)
    }

    fn go(&self, url: &str) -> ActionResult<()> {
        log::debug!("[ACTIONS] Navigate to {}", url);
        self.navigator.navigate(url)
    }
}
