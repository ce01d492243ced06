//! App Configuration
//!
//! Defaults, optionally overridden by an inline JSON block:
//! `<script id="todo-config" type="application/json">{...}</script>`

use item_actions::Routes;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub routes: Routes,
    /// How long a failure notice stays visible
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            routes: Routes::default(),
            notice_timeout_ms: 4000,
        }
    }
}

/// Parse the inline config, falling back to defaults on any problem.
pub fn parse(raw: Option<&str>) -> AppConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return AppConfig::default();
    };
    match serde_json::from_str(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
            AppConfig::default()
        }
    }
}

pub fn load() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    parse(raw.as_deref())
}
