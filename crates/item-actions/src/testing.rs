//! Recording fakes for the client, navigator and node seams.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use tokio::sync::oneshot;

use crate::client::{HttpClient, HttpResponse, Method};
use crate::error::{ActionError, ActionResult};
use crate::id::ItemId;
use crate::navigator::Navigator;
use crate::nodes::ItemNodes;

pub fn ok(status: u16, body: &str) -> ActionResult<HttpResponse> {
    Ok(HttpResponse { status, body: body.to_string() })
}

/// Answers from a per-url script and records every request.
#[derive(Default)]
pub struct ScriptedClient {
    responses: RefCell<HashMap<String, ActionResult<HttpResponse>>>,
    pub requests: RefCell<Vec<(Method, String)>>,
}

impl ScriptedClient {
    pub fn respond(self, url: &str, response: ActionResult<HttpResponse>) -> Self {
        self.responses.borrow_mut().insert(url.to_string(), response);
        self
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests.borrow().clone()
    }
}

impl HttpClient for ScriptedClient {
    async fn send(&self, method: Method, url: &str) -> ActionResult<HttpResponse> {
        self.requests.borrow_mut().push((method, url.to_string()));
        self.responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(ActionError::Network(format!("no script for {}", url))))
    }
}

/// Holds each request open until the test releases it.
#[derive(Default)]
pub struct GatedClient {
    gates: RefCell<HashMap<String, oneshot::Receiver<ActionResult<HttpResponse>>>>,
}

impl GatedClient {
    pub fn gate(&self, url: &str) -> oneshot::Sender<ActionResult<HttpResponse>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(url.to_string(), rx);
        tx
    }
}

impl HttpClient for GatedClient {
    async fn send(&self, _method: Method, url: &str) -> ActionResult<HttpResponse> {
        let gate = self.gates.borrow_mut().remove(url);
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(ActionError::Network("gate dropped".into()))),
            None => Err(ActionError::Network(format!("no gate for {}", url))),
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> ActionResult<()> {
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Rendered ids plus a log of removals in order
#[derive(Default)]
pub struct RecordingNodes {
    pub present: RefCell<BTreeSet<ItemId>>,
    pub removed: RefCell<Vec<ItemId>>,
}

impl RecordingNodes {
    pub fn with_ids(ids: &[u32]) -> Self {
        let nodes = Self::default();
        nodes.present.borrow_mut().extend(ids.iter().map(|id| ItemId::from(*id)));
        nodes
    }

    pub fn contains(&self, id: u32) -> bool {
        self.present.borrow().contains(&ItemId::from(id))
    }
}

impl ItemNodes for RecordingNodes {
    fn remove(&self, id: &ItemId) -> bool {
        let removed = self.present.borrow_mut().remove(id);
        if removed {
            self.removed.borrow_mut().push(id.clone());
        }
        removed
    }
}
