//! Folder-window transition helpers used by the desktop reducer.
//!
//! Every helper returns `true` when state changed. Unknown folder ids are ignored.

use crate::model::{DesktopState, FolderWindow, ItemId, LayoutConfig, WindowRect};

/// Default rect for a new window given how many windows are already open.
pub fn cascade_rect(layout: &LayoutConfig, open_count: usize) -> WindowRect {
    let step = layout.cascade_step * i32::try_from(open_count).unwrap_or(i32::MAX / 2);
    WindowRect {
        x: layout.window_origin_x.saturating_add(step),
        y: layout.window_origin_y.saturating_add(step),
        w: layout.window_width,
        h: layout.window_height,
    }
}

fn next_stack_order(state: &mut DesktopState) -> u32 {
    state.max_stack_order = state.max_stack_order.saturating_add(1);
    state.max_stack_order
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    folder_id: &ItemId,
) -> Option<&'a mut FolderWindow> {
    state.windows.iter_mut().find(|w| &w.folder_id == folder_id)
}

/// Opens a window for a folder item. Already-open folders and non-folder ids are left alone.
pub fn open_folder(state: &mut DesktopState, folder_id: &ItemId) -> bool {
    let is_folder = state.item(folder_id).is_some_and(|item| item.is_folder());
    if !is_folder || state.window(folder_id).is_some() {
        return false;
    }
    let rect = cascade_rect(&state.layout, state.windows.len());
    let stack_order = next_stack_order(state);
    state.windows.push(FolderWindow {
        folder_id: folder_id.clone(),
        rect,
        stack_order,
        minimized: false,
        fullscreen: false,
    });
    true
}

/// Drops the window; reopening the folder starts from default geometry.
pub fn close_folder(state: &mut DesktopState, folder_id: &ItemId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| &w.folder_id != folder_id);
    state.windows.len() != before
}

/// Raises a window above every other one.
pub fn bring_to_front(state: &mut DesktopState, folder_id: &ItemId) -> bool {
    let Some(current) = state.window(folder_id).map(|w| w.stack_order) else {
        return false;
    };
    let shares_top = state
        .windows
        .iter()
        .any(|w| &w.folder_id != folder_id && w.stack_order == current);
    if current == state.max_stack_order && !shares_top {
        return false;
    }
    let stack_order = next_stack_order(state);
    if let Some(window) = find_window_mut(state, folder_id) {
        window.stack_order = stack_order;
    }
    true
}

pub fn toggle_minimize(state: &mut DesktopState, folder_id: &ItemId) -> bool {
    let Some(window) = find_window_mut(state, folder_id) else {
        return false;
    };
    window.minimized = !window.minimized;
    true
}

pub fn toggle_fullscreen(state: &mut DesktopState, folder_id: &ItemId) -> bool {
    let Some(window) = find_window_mut(state, folder_id) else {
        return false;
    };
    window.fullscreen = !window.fullscreen;
    true
}

/// Moves a window's stored origin. Fullscreen windows do not move.
pub fn move_window(state: &mut DesktopState, folder_id: &ItemId, x: i32, y: i32) -> bool {
    let Some(window) = find_window_mut(state, folder_id) else {
        return false;
    };
    if window.fullscreen || (window.rect.x == x && window.rect.y == y) {
        return false;
    }
    window.rect.x = x;
    window.rect.y = y;
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn documents() -> ItemId {
        ItemId::new("1")
    }

    fn photos() -> ItemId {
        ItemId::new("3")
    }

    #[test]
    fn cascade_offsets_each_new_window() {
        let layout = LayoutConfig::default();
        assert_eq!(
            cascade_rect(&layout, 0),
            WindowRect {
                x: 100,
                y: 80,
                w: 700,
                h: 500
            }
        );
        assert_eq!(cascade_rect(&layout, 2).x, 160);
        assert_eq!(cascade_rect(&layout, 2).y, 140);
    }

    #[test]
    fn open_folder_ignores_non_folders_and_missing_ids() {
        let mut state = DesktopState::default();
        assert!(!open_folder(&mut state, &ItemId::new("7")));
        assert!(!open_folder(&mut state, &ItemId::new("missing")));
        assert!(state.windows.is_empty());
        assert_eq!(state.max_stack_order, 0);
    }

    #[test]
    fn bring_to_front_skips_current_front_window() {
        let mut state = DesktopState::default();
        open_folder(&mut state, &documents());
        open_folder(&mut state, &photos());

        assert!(!bring_to_front(&mut state, &photos()));
        assert_eq!(state.max_stack_order, 2);
        assert!(bring_to_front(&mut state, &documents()));
        assert_eq!(state.window(&documents()).map(|w| w.stack_order), Some(3));
    }

    #[test]
    fn fullscreen_windows_do_not_move() {
        let mut state = DesktopState::default();
        open_folder(&mut state, &documents());
        toggle_fullscreen(&mut state, &documents());

        assert!(!move_window(&mut state, &documents(), 5, 5));
        toggle_fullscreen(&mut state, &documents());
        assert!(move_window(&mut state, &documents(), 5, 5));
        let rect = state.window(&documents()).expect("window").rect;
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (5, 5, 700, 500));
    }

    #[test]
    fn close_reports_whether_a_window_existed() {
        let mut state = DesktopState::default();
        open_folder(&mut state, &documents());
        assert!(close_folder(&mut state, &documents()));
        assert!(!close_folder(&mut state, &documents()));
    }
}
