//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;
use platform_host::PrefsStore;
use platform_host_web::prefs_store;

use crate::{
    model::DesktopSnapshot,
    persistence::{self, PersistenceError},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

/// Executes one effect against `store` using the durable part of the current state.
///
/// # Errors
///
/// Returns the persistence failure for the effect.
pub async fn run_runtime_effect<S: PrefsStore + ?Sized>(
    store: &S,
    snapshot: &DesktopSnapshot,
    effect: RuntimeEffect,
) -> Result<(), PersistenceError> {
    match effect {
        RuntimeEffect::PersistItems => persistence::persist_items(store, &snapshot.items).await,
        RuntimeEffect::PersistWallpaper => {
            persistence::persist_wallpaper(store, &snapshot.wallpaper).await
        }
    }
}

/// Executes effects in order. Failures are logged; the in-memory state is never rolled back.
pub async fn run_runtime_effects<S: PrefsStore + ?Sized>(
    store: &S,
    snapshot: &DesktopSnapshot,
    effects: impl IntoIterator<Item = RuntimeEffect>,
) {
    for effect in effects {
        if let Err(err) = run_runtime_effect(store, snapshot, effect).await {
            logging::warn!("runtime effect {effect:?} failed: {err}");
        }
    }
}

/// Folds repeated effects of one batch; each write stores the full current value.
fn coalesce(queued: Vec<RuntimeEffect>) -> Vec<RuntimeEffect> {
    let mut batch = Vec::with_capacity(queued.len());
    for effect in queued {
        if !batch.contains(&effect) {
            batch.push(effect);
        }
    }
    batch
}

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before spawning so dispatches made meanwhile start a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let snapshot = runtime.state.get_untracked().snapshot();
        let batch = coalesce(queued);
        spawn_local(async move {
            run_runtime_effects(&prefs_store(), &snapshot, batch).await;
        });
    });
}
