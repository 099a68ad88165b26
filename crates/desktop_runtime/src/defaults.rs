//! Built-in desktop contents shown on first visit and after a corrupt stored layout.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::{
    content::encode_data_url,
    model::{DesktopItem, ItemContent, ItemId, ItemScope, ItemStore},
};

include!(concat!(env!("OUT_DIR"), "/default_desktop_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
struct DefaultItemEntry {
    id: String,
    name: String,
    kind: String,
    x: i32,
    y: i32,
    parent: Option<String>,
    url: Option<String>,
    text: Option<String>,
    mime_type: Option<String>,
}

impl DefaultItemEntry {
    fn to_item(&self) -> DesktopItem {
        let content = match (self.kind.as_str(), &self.url, &self.text) {
            ("image", Some(url), _) => ItemContent::Image { url: url.clone() },
            ("file", url, text) => {
                let mime = self.mime_type.as_deref().unwrap_or("text/plain");
                let url = match (url, text) {
                    (Some(url), _) => url.clone(),
                    (None, text) => encode_data_url(
                        &format!("{mime};charset=utf-8"),
                        text.as_deref().unwrap_or_default().as_bytes(),
                    ),
                };
                ItemContent::File {
                    url,
                    mime_type: self.mime_type.clone(),
                }
            }
            _ => ItemContent::Folder,
        };
        DesktopItem {
            id: ItemId::new(self.id.as_str()),
            name: self.name.clone(),
            content,
            x: self.x,
            y: self.y,
            parent: self
                .parent
                .as_deref()
                .map_or(ItemScope::Desktop, ItemScope::folder),
        }
    }
}

fn default_entries() -> &'static [DefaultItemEntry] {
    static ENTRIES: OnceLock<Vec<DefaultItemEntry>> = OnceLock::new();
    ENTRIES.get_or_init(|| {
        serde_json::from_str(DEFAULT_DESKTOP_ITEMS_JSON)
            .expect("generated default desktop manifest should parse")
    })
}

/// Returns a fresh copy of the built-in item set.
pub fn default_items() -> ItemStore {
    default_entries().iter().map(DefaultItemEntry::to_item).collect()
}

/// Smallest stored collection accepted on load; anything shorter is replaced by the defaults.
pub fn min_stored_items() -> usize {
    default_entries().len()
}
