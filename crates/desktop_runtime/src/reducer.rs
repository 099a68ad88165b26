//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::next_unique_timestamp_ms;

use crate::{
    content::ContentUpload,
    model::{
        ContextMenuRequest, ContextMenuTarget, DesktopFocus, DesktopItem, DesktopSnapshot,
        DesktopState, InteractionState, ItemContent, ItemDraft, ItemId, ItemScope, ItemStore,
        PointerPosition, Wallpaper, WindowDragSession, NEW_FOLDER_NAME,
    },
    placement::free_cell_in_scope,
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Add an item exactly as drafted; the caller picks the cell.
    AddItem {
        /// Item to add. A fresh id is assigned.
        draft: ItemDraft,
    },
    /// Add a `New Folder` at the first free cell of `parent`.
    CreateFolder {
        /// Scope the folder is created in.
        parent: ItemScope,
    },
    /// Store uploaded bytes as an image or file item at the first free cell of `parent`.
    ImportUpload {
        /// Scope the item is created in.
        parent: ItemScope,
        /// Uploaded content.
        upload: ContentUpload,
    },
    /// Upload dropped onto the desktop background. Ignored outside edit mode.
    DropUpload {
        /// Dropped content.
        upload: ContentUpload,
    },
    /// Replace an item's grid coordinates.
    MoveItem {
        /// Item to move.
        item_id: ItemId,
        /// New column.
        x: i32,
        /// New row.
        y: i32,
    },
    /// Rename an item. Surrounding whitespace is dropped and blank names are ignored.
    RenameItem {
        /// Item to rename.
        item_id: ItemId,
        /// New display name.
        name: String,
    },
    /// Remove one item. Contained items and open windows are left in place.
    DeleteItem {
        /// Item to delete.
        item_id: ItemId,
    },
    /// Double-click: open a folder window or preview an image/file.
    ActivateItem {
        /// Item that was activated.
        item_id: ItemId,
    },
    /// Close the image/file preview modal.
    ClosePreview,
    /// Open a window for a folder.
    OpenFolder {
        /// Folder to open.
        folder_id: ItemId,
    },
    /// Close a folder window.
    CloseFolder {
        /// Folder whose window closes.
        folder_id: ItemId,
    },
    /// Raise a folder window above all others.
    BringToFront {
        /// Folder whose window is raised.
        folder_id: ItemId,
    },
    /// Minimize, or restore from the dock.
    ToggleMinimize {
        /// Folder whose window toggles.
        folder_id: ItemId,
    },
    /// Enter or leave fullscreen.
    ToggleFullscreen {
        /// Folder whose window toggles.
        folder_id: ItemId,
    },
    /// Set a window's origin directly.
    MoveWindow {
        /// Folder whose window moves.
        folder_id: ItemId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Begin dragging a window by its title bar.
    BeginWindowDrag {
        /// Folder whose window is dragged.
        folder_id: ItemId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateWindowDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndWindowDrag,
    /// Select one item, deselecting any other.
    SelectItem {
        /// Item to select.
        item_id: ItemId,
    },
    /// Background click: clear the selection and dismiss any context menu.
    ClearFocus,
    /// Secondary click on the desktop, a folder background, or an item.
    OpenContextMenu {
        /// Menu position and target.
        menu: ContextMenuRequest,
    },
    /// Close the context menu, keeping the selection.
    DismissContextMenu,
    /// Enter or leave edit mode.
    SetEditMode {
        /// Whether editing is allowed.
        enabled: bool,
    },
    /// Replace the desktop background.
    SetWallpaper {
        /// New background.
        wallpaper: Wallpaper,
    },
    /// Install a snapshot loaded from durable storage.
    HydrateSnapshot {
        /// Loaded items and wallpaper.
        snapshot: DesktopSnapshot,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the runtime host to execute.
pub enum RuntimeEffect {
    /// Mirror the item collection to durable storage.
    PersistItems,
    /// Mirror the wallpaper to durable storage.
    PersistWallpaper,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Every action is total: actions naming an unknown item or window leave state untouched and
/// produce no effects.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::AddItem { draft } => {
            add_item(state, draft);
            effects.push(RuntimeEffect::PersistItems);
        }
        DesktopAction::CreateFolder { parent } => {
            create_in_scope(state, parent, NEW_FOLDER_NAME.to_string(), ItemContent::Folder);
            effects.push(RuntimeEffect::PersistItems);
        }
        DesktopAction::ImportUpload { parent, upload } => {
            let content = upload.to_item_content();
            create_in_scope(state, parent, upload.file_name, content);
            effects.push(RuntimeEffect::PersistItems);
        }
        DesktopAction::DropUpload { upload } => {
            if state.edit_mode {
                let content = upload.to_item_content();
                create_in_scope(state, ItemScope::Desktop, upload.file_name, content);
                effects.push(RuntimeEffect::PersistItems);
            }
        }
        DesktopAction::MoveItem { item_id, x, y } => {
            if let Some(item) = state.items.get_mut(&item_id) {
                item.x = x;
                item.y = y;
                effects.push(RuntimeEffect::PersistItems);
            }
        }
        DesktopAction::RenameItem { item_id, name } => {
            let name = name.trim();
            if let (Some(item), false) = (state.items.get_mut(&item_id), name.is_empty()) {
                item.name = name.to_string();
                effects.push(RuntimeEffect::PersistItems);
            }
        }
        DesktopAction::DeleteItem { item_id } => {
            if state.items.remove(&item_id).is_some() {
                if state.focus.references(&item_id) {
                    state.focus = DesktopFocus::Idle;
                }
                if state.preview.as_ref() == Some(&item_id) {
                    state.preview = None;
                }
                effects.push(RuntimeEffect::PersistItems);
            }
        }
        DesktopAction::ActivateItem { item_id } => {
            match state.item(&item_id).map(DesktopItem::is_folder) {
                Some(true) => {
                    window_manager::open_folder(state, &item_id);
                }
                Some(false) => state.preview = Some(item_id),
                None => {}
            }
        }
        DesktopAction::ClosePreview => {
            state.preview = None;
        }
        DesktopAction::OpenFolder { folder_id } => {
            window_manager::open_folder(state, &folder_id);
        }
        DesktopAction::CloseFolder { folder_id } => {
            window_manager::close_folder(state, &folder_id);
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.folder_id == folder_id)
            {
                interaction.dragging = None;
            }
        }
        DesktopAction::BringToFront { folder_id } => {
            window_manager::bring_to_front(state, &folder_id);
        }
        DesktopAction::ToggleMinimize { folder_id } => {
            window_manager::toggle_minimize(state, &folder_id);
        }
        DesktopAction::ToggleFullscreen { folder_id } => {
            window_manager::toggle_fullscreen(state, &folder_id);
        }
        DesktopAction::MoveWindow { folder_id, x, y } => {
            window_manager::move_window(state, &folder_id, x, y);
        }
        DesktopAction::BeginWindowDrag { folder_id, pointer } => {
            if let Some(rect_start) = state.window(&folder_id).map(|w| w.rect) {
                window_manager::bring_to_front(state, &folder_id);
                interaction.dragging = Some(WindowDragSession {
                    folder_id,
                    pointer_start: pointer,
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateWindowDrag { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let target = session.rect_start.offset(dx, dy);
                window_manager::move_window(state, &session.folder_id, target.x, target.y);
            }
        }
        DesktopAction::EndWindowDrag => {
            interaction.dragging = None;
        }
        DesktopAction::SelectItem { item_id } => {
            if state.items.contains(&item_id) {
                state.focus = DesktopFocus::Selected(item_id);
            }
        }
        DesktopAction::ClearFocus => {
            state.focus = DesktopFocus::Idle;
        }
        DesktopAction::OpenContextMenu { menu } => {
            if state.edit_mode {
                open_context_menu(state, menu);
            }
        }
        DesktopAction::DismissContextMenu => {
            dismiss_context_menu(state);
        }
        DesktopAction::SetEditMode { enabled } => {
            state.edit_mode = enabled;
            if !enabled {
                dismiss_context_menu(state);
            }
        }
        DesktopAction::SetWallpaper { wallpaper } => {
            state.wallpaper = wallpaper;
            effects.push(RuntimeEffect::PersistWallpaper);
        }
        DesktopAction::HydrateSnapshot { snapshot } => {
            state.items = snapshot.items;
            state.wallpaper = snapshot.wallpaper;
            let items = &state.items;
            state.windows.retain(|w| items.contains(&w.folder_id));
            state.focus = DesktopFocus::Idle;
            state.preview = None;
            interaction.dragging = None;
        }
    }
    effects
}

/// Returns an id not used by any item, issued by the millisecond item clock.
pub fn next_item_id(items: &ItemStore) -> ItemId {
    let stamp = next_unique_timestamp_ms(|ms| items.contains(&ItemId(ms.to_string())));
    ItemId(stamp.to_string())
}

fn add_item(state: &mut DesktopState, draft: ItemDraft) -> ItemId {
    let id = next_item_id(&state.items);
    state.items.insert(DesktopItem::from_draft(id.clone(), draft));
    id
}

fn create_in_scope(
    state: &mut DesktopState,
    parent: ItemScope,
    name: String,
    content: ItemContent,
) -> ItemId {
    let cell = free_cell_in_scope(&state.items, &parent, state.layout.grid_rows);
    add_item(
        state,
        ItemDraft {
            name,
            content,
            x: cell.x,
            y: cell.y,
            parent,
        },
    )
}

fn open_context_menu(state: &mut DesktopState, menu: ContextMenuRequest) {
    let selected = match &menu.target {
        ContextMenuTarget::Desktop => state.focus.selected_item().cloned(),
        ContextMenuTarget::Folder(folder_id) => {
            if !state.items.contains(folder_id) {
                return;
            }
            state.focus.selected_item().cloned()
        }
        ContextMenuTarget::Item(item_id) => {
            if !state.items.contains(item_id) {
                return;
            }
            Some(item_id.clone())
        }
    };
    state.focus = DesktopFocus::ContextMenu { menu, selected };
}

fn dismiss_context_menu(state: &mut DesktopState) {
    if let DesktopFocus::ContextMenu { selected, .. } = &state.focus {
        state.focus = selected
            .clone()
            .map_or(DesktopFocus::Idle, DesktopFocus::Selected);
    }
}
