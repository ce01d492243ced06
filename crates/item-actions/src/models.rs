//! To-do list entries as served by `GET /api/todo`.

use serde::Deserialize;

use crate::id::ItemId;

/// List entry (server JSON uses Go-style field names)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodoItem {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Done", default)]
    pub done: bool,
}

impl TodoItem {
    pub fn item_id(&self) -> ItemId {
        ItemId::from(self.id)
    }
}

/// Decode a list payload; an empty table is served as `null`.
pub fn decode_list(body: &str) -> serde_json::Result<Vec<TodoItem>> {
    let items: Option<Vec<TodoItem>> = serde_json::from_str(body)?;
    Ok(items.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list() {
        let body = r#"[
            {"Title":"Buy milk","Description":"2 litres","ID":1,"Done":false},
            {"Title":"Call mom","Description":"","ID":4,"Done":true}
        ]"#;
        let items = decode_list(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Buy milk");
        assert_eq!(items[1].item_id(), ItemId::from(4));
        assert!(items[1].done);
    }

    #[test]
    fn test_decode_null_list() {
        assert!(decode_list("null").unwrap().is_empty());
        assert!(decode_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_list("<html>").is_err());
    }
}
