//! Millisecond clock behind desktop item ids.
//!
//! Item ids are decimal unix-millisecond stamps. A stamp is never issued twice on one thread, and
//! stamps the caller reports as taken are skipped.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static LAST_ITEM_STAMP_MS: Cell<u64> = const { Cell::new(0) };
}

fn wall_clock_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// First stamp that is at least `now` and later than `last`.
fn first_free_after(last: u64, now: u64, is_taken: &mut impl FnMut(u64) -> bool) -> u64 {
    let mut candidate = now.max(last.saturating_add(1));
    while is_taken(candidate) {
        candidate = candidate.saturating_add(1);
    }
    candidate
}

/// Issues a millisecond stamp for a new item id.
///
/// The result is later than every stamp issued before on this thread, never earlier than the wall
/// clock, and rejected by `is_taken`. Stamps within one millisecond or after the clock steps back
/// keep counting up from the last one issued.
pub fn next_unique_timestamp_ms(mut is_taken: impl FnMut(u64) -> bool) -> u64 {
    let now = wall_clock_ms();
    LAST_ITEM_STAMP_MS.with(|last| {
        let stamp = first_free_after(last.get(), now, &mut is_taken);
        last.set(stamp);
        stamp
    })
}
