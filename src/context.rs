//! Application Context
//!
//! Shared actions and the failure notice, provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use item_actions::{FetchClient, ItemActions, LocationNavigator};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;

pub type Actions = ItemActions<FetchClient, LocationNavigator>;

#[derive(Clone)]
pub struct AppContext {
    pub actions: Actions,
    /// Message shown in the notice banner
    pub notice: RwSignal<Option<String>>,
    notice_timeout_ms: u32,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            actions: ItemActions::new(FetchClient, LocationNavigator).with_routes(config.routes),
            notice: RwSignal::new(None),
            notice_timeout_ms: config.notice_timeout_ms,
        }
    }

    /// Show a notice that clears itself unless replaced first
    pub fn notify(&self, message: String) {
        self.notice.set(Some(message.clone()));
        let notice = self.notice;
        let timeout = self.notice_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            if notice.get_untracked().as_deref() == Some(message.as_str()) {
                notice.set(None);
            }
        });
    }
}
