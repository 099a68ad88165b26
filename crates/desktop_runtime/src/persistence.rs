//! Desktop runtime persistence adapters for boot hydration and durable item/wallpaper state.
//!
//! Items and wallpaper live under separate keys so a wallpaper change never rewrites the item
//! collection. Loads never fail outward: anything missing or unreadable falls back to the built-in
//! desktop.

use leptos::logging;
use platform_host::{save_pref_with, PrefsStore};
use thiserror::Error;

use crate::{
    defaults::{default_items, min_stored_items},
    model::{DesktopItem, DesktopSnapshot, ItemStore, Wallpaper},
};

/// Key holding the item collection as a JSON array.
pub const ITEMS_KEY: &str = "desktop.items.v4";
/// Key holding the wallpaper as a JSON object tagged with its variant.
pub const WALLPAPER_KEY: &str = "desktop.wallpaper";
/// Item keys written by earlier layouts; cleared on boot.
pub const LEGACY_ITEMS_KEYS: [&str; 3] = ["desktop.items", "desktop.items.v2", "desktop.items.v3"];

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Encoding or writing `key` failed.
    #[error("failed to persist {key}: {message}")]
    Store { key: &'static str, message: String },
}

async fn persist_value<S, T>(
    store: &S,
    key: &'static str,
    value: &T,
) -> Result<(), PersistenceError>
where
    S: PrefsStore + ?Sized,
    T: serde::Serialize + ?Sized,
{
    save_pref_with(store, key, value)
        .await
        .map_err(|message| PersistenceError::Store { key, message })
}

/// Decodes a stored item collection, substituting the defaults when it is missing, malformed, or
/// smaller than the built-in set.
pub fn items_from_stored(raw: Option<&str>) -> ItemStore {
    let Some(raw) = raw else {
        return default_items();
    };
    match serde_json::from_str::<Vec<DesktopItem>>(raw) {
        Ok(items) if items.len() >= min_stored_items() => ItemStore::from(items),
        Ok(items) => {
            logging::log!(
                "stored desktop has {} items; restoring defaults",
                items.len()
            );
            default_items()
        }
        Err(err) => {
            logging::warn!("stored desktop items are unreadable: {err}");
            default_items()
        }
    }
}

/// Decodes a stored wallpaper.
///
/// Older builds wrote only the source, as a JSON string or as bare text; those are classified by
/// their prefix.
pub fn wallpaper_from_stored(raw: Option<&str>) -> Wallpaper {
    match raw.map(str::trim) {
        None | Some("") => Wallpaper::default(),
        Some(raw) => serde_json::from_str::<Wallpaper>(raw)
            .or_else(|_| serde_json::from_str::<String>(raw).map(Wallpaper::from))
            .unwrap_or_else(|_| Wallpaper::from(raw.to_string())),
    }
}

/// Removes item keys left behind by earlier layouts. Failures are logged and skipped.
pub async fn purge_legacy_keys<S: PrefsStore + ?Sized>(store: &S) {
    for key in LEGACY_ITEMS_KEYS {
        if let Err(err) = store.delete_pref(key).await {
            logging::warn!("failed to clear legacy key {key}: {err}");
        }
    }
}

async fn load_raw<S: PrefsStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.load_pref(key).await {
        Ok(raw) => raw,
        Err(err) => {
            logging::warn!("failed to load {key}: {err}");
            None
        }
    }
}

/// Loads the durable desktop, clearing legacy keys first.
pub async fn load_boot_snapshot<S: PrefsStore + ?Sized>(store: &S) -> DesktopSnapshot {
    purge_legacy_keys(store).await;
    let items = items_from_stored(load_raw(store, ITEMS_KEY).await.as_deref());
    let wallpaper = wallpaper_from_stored(load_raw(store, WALLPAPER_KEY).await.as_deref());
    DesktopSnapshot { items, wallpaper }
}

/// Writes the full item collection.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn persist_items<S: PrefsStore + ?Sized>(
    store: &S,
    items: &ItemStore,
) -> Result<(), PersistenceError> {
    persist_value(store, ITEMS_KEY, items).await
}

/// Writes the wallpaper with its variant.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn persist_wallpaper<S: PrefsStore + ?Sized>(
    store: &S,
    wallpaper: &Wallpaper,
) -> Result<(), PersistenceError> {
    persist_value(store, WALLPAPER_KEY, wallpaper).await
}
