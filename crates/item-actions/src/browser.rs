//! Browser Bindings
//!
//! `fetch`-backed client, `window.location` navigation and a DOM node map
//! for server-rendered lists. These call into the JS host and only work
//! on wasm32.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Request, RequestInit, Response};

use crate::client::{HttpClient, HttpResponse, Method};
use crate::error::{ActionError, ActionResult};
use crate::id::ItemId;
use crate::navigator::Navigator;
use crate::nodes::ItemNodes;

/// Attribute carrying the item id on server-rendered rows
pub const ITEM_ID_ATTR: &str = "data-item-id";

fn js_err(e: wasm_bindgen::JsValue) -> String {
    format!("{:?}", e)
}

/// Each `send` builds its own request from the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

impl HttpClient for FetchClient {
    async fn send(&self, method: Method, url: &str) -> ActionResult<HttpResponse> {
        let window = web_sys::window().ok_or_else(|| ActionError::Network("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method(method.as_str());
        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| ActionError::Network(js_err(e)))?;

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ActionError::Network(js_err(e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|e| ActionError::Network(js_err(e)))?;

        let status = response.status();
        let text = response.text().map_err(|e| ActionError::Network(js_err(e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| ActionError::Network(js_err(e)))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &str) -> ActionResult<()> {
        let window = web_sys::window().ok_or_else(|| ActionError::Navigation("no window".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| ActionError::Navigation(js_err(e)))
    }
}

/// Id to element map for rows already present in the page
#[derive(Debug, Default)]
pub struct DomNodes {
    elements: RefCell<HashMap<ItemId, Element>>,
}

impl DomNodes {
    /// Map every element under `document` that carries [`ITEM_ID_ATTR`].
    pub fn collect(document: &Document) -> ActionResult<Self> {
        let nodes = Self::default();
        let selector = format!("[{}]", ITEM_ID_ATTR);
        let list = document
            .query_selector_all(&selector)
            .map_err(|e| ActionError::Navigation(js_err(e)))?;

        for index in 0..list.length() {
            let Some(element) = list.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(raw) = element.get_attribute(ITEM_ID_ATTR) else {
                continue;
            };
            match ItemId::parse(&raw) {
                Ok(id) => nodes.insert(id, element),
                Err(_) => log::warn!("[DOM] Skipping row with empty {}", ITEM_ID_ATTR),
            }
        }
        log::debug!("[DOM] Mapped {} rows", nodes.len());
        Ok(nodes)
    }

    pub fn insert(&self, id: ItemId, element: Element) {
        self.elements.borrow_mut().insert(id, element);
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }
}

impl ItemNodes for DomNodes {
    fn remove(&self, id: &ItemId) -> bool {
        match self.elements.borrow_mut().remove(id) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }
}
