//! Route Configuration
//!
//! Base paths for the to-do server's API and page routes.

use serde::Deserialize;

use crate::id::ItemId;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Routes {
    /// Prefix for item resources, e.g. `/api/todo/` + id
    pub api_base: String,
    /// Prefix for the edit page
    pub edit_base: String,
    /// Prefix for the detail page
    pub detail_base: String,
    /// Page for creating a new item
    pub new_page: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            api_base: "/api/todo/".to_string(),
            edit_base: "/todo/edit/".to_string(),
            detail_base: "/todo/".to_string(),
            new_page: "/todo/new".to_string(),
        }
    }
}

impl Routes {
    pub fn delete_url(&self, id: &ItemId) -> String {
        join(&self.api_base, id)
    }

    pub fn edit_url(&self, id: &ItemId) -> String {
        join(&self.edit_base, id)
    }

    pub fn detail_url(&self, id: &ItemId) -> String {
        join(&self.detail_base, id)
    }

    /// Collection endpoint, the api base without its trailing slash
    pub fn list_url(&self) -> String {
        self.api_base.trim_end_matches('/').to_string()
    }
}

fn join(base: &str, id: &ItemId) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, id.path_segment())
    } else {
        format!("{}/{}", base, id.path_segment())
    }
}
