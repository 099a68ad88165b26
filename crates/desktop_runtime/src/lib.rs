//! Desktop state runtime: items, folder windows, selection, and persistence for a browser desktop.
//!
//! [`reduce_desktop`] is the single transition function. It mutates [`DesktopState`] and returns
//! the [`RuntimeEffect`] values the host must execute against a [`platform_host::PrefsStore`].
//! [`DesktopProvider`] wires the reducer into Leptos signals for the browser build.

pub mod content;
pub mod defaults;
pub mod effect_executor;
pub mod model;
pub mod persistence;
pub mod placement;
pub mod preview;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use content::{ContentError, ContentUpload};
pub use model::*;
pub use persistence::{
    load_boot_snapshot, persist_items, persist_wallpaper, PersistenceError, ITEMS_KEY,
    WALLPAPER_KEY,
};
pub use preview::{load_text_preview, ItemPreview, PreviewKind};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
