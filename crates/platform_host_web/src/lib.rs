//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The desktop runtime persists its item layout and wallpaper through [`prefs_store`], which
//! resolves to `window.localStorage` in the browser and to a no-op store when the crate is built
//! with the `desktop-host-stub` feature.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::{
    host_strategy_name, prefs_store, selected_host_strategy, HostStrategy, PrefsStoreAdapter,
};
pub use storage::local_prefs::WebPrefsStore;
