use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::content::is_content_uri;

/// Storage schema generation for the persisted item collection.
///
/// Bumping this changes the storage key and discards every layout stored under older keys.
pub const DESKTOP_ITEMS_SCHEMA_VERSION: u32 = 4;
pub const DEFAULT_GRID_ROWS: i32 = 5;
pub const DEFAULT_WINDOW_WIDTH: i32 = 700;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 500;
pub const DEFAULT_WALLPAPER_ID: &str = "desktop-default";
pub const NEW_FOLDER_NAME: &str = "New Folder";
/// Title shown for a window whose folder item no longer exists.
pub const UNTITLED_WINDOW_TITLE: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parent scope of an item: the desktop root or a containing folder.
///
/// Serialized as the owning folder id, or `null` for the desktop root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<ItemId>", into = "Option<ItemId>")]
pub enum ItemScope {
    #[default]
    Desktop,
    Folder(ItemId),
}

impl ItemScope {
    pub fn folder(id: impl Into<String>) -> Self {
        Self::Folder(ItemId::new(id))
    }

    pub fn folder_id(&self) -> Option<&ItemId> {
        match self {
            Self::Desktop => None,
            Self::Folder(id) => Some(id),
        }
    }
}

impl From<Option<ItemId>> for ItemScope {
    fn from(value: Option<ItemId>) -> Self {
        value.map_or(Self::Desktop, Self::Folder)
    }
}

impl From<ItemScope> for Option<ItemId> {
    fn from(value: ItemScope) -> Self {
        match value {
            ItemScope::Desktop => None,
            ItemScope::Folder(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    Image,
    File,
}

/// Kind-specific payload of an item. Only images and files carry a content reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemContent {
    Folder,
    Image {
        #[serde(rename = "imageUrl")]
        url: String,
    },
    File {
        #[serde(rename = "fileUrl")]
        url: String,
        #[serde(rename = "fileType", default, skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
    },
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Folder => ItemKind::Folder,
            Self::Image { .. } => ItemKind::Image,
            Self::File { .. } => ItemKind::File,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Folder => None,
            Self::Image { url } | Self::File { url, .. } => Some(url),
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Self::File { mime_type, .. } => mime_type.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopItem {
    pub id: ItemId,
    pub name: String,
    #[serde(flatten)]
    pub content: ItemContent,
    pub x: i32,
    pub y: i32,
    #[serde(rename = "parentId", default)]
    pub parent: ItemScope,
}

impl DesktopItem {
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            content: draft.content,
            x: draft.x,
            y: draft.y,
            parent: draft.parent,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    pub fn is_folder(&self) -> bool {
        self.kind() == ItemKind::Folder
    }
}

/// An item awaiting an id. Coordinates are taken as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub content: ItemContent,
    pub x: i32,
    pub y: i32,
    pub parent: ItemScope,
}

/// Item table with stable slots and an id index.
///
/// Removal leaves a vacant slot so surviving items keep their position; the table compacts once
/// vacant slots outnumber live ones. Iteration and serialization follow insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<DesktopItem>", into = "Vec<DesktopItem>")]
pub struct ItemStore {
    slots: Vec<Option<DesktopItem>>,
    index: HashMap<ItemId, usize>,
}

impl ItemStore {
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &ItemId) -> Option<&DesktopItem> {
        let slot = *self.index.get(id)?;
        self.slots.get(slot)?.as_ref()
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut DesktopItem> {
        let slot = *self.index.get(id)?;
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Appends `item`. Returns `false` and leaves the table untouched when the id is taken.
    pub fn insert(&mut self, item: DesktopItem) -> bool {
        if self.index.contains_key(&item.id) {
            return false;
        }
        self.index.insert(item.id.clone(), self.slots.len());
        self.slots.push(Some(item));
        true
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<DesktopItem> {
        let slot = self.index.remove(id)?;
        let removed = self.slots.get_mut(slot)?.take();
        if self.slots.len() > self.index.len() * 2 {
            self.compact();
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &DesktopItem> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Items whose parent is `scope`. Yielded items borrow the store, not the key.
    pub fn in_scope<'s, 'k>(
        &'s self,
        scope: &'k ItemScope,
    ) -> impl Iterator<Item = &'s DesktopItem> + 'k
    where
        's: 'k,
    {
        self.iter().filter(move |item| &item.parent == scope)
    }

    pub fn to_vec(&self) -> Vec<DesktopItem> {
        self.iter().cloned().collect()
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        self.index = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(slot, item)| item.as_ref().map(|item| (item.id.clone(), slot)))
            .collect();
    }
}

impl PartialEq for ItemStore {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ItemStore {}

impl From<Vec<DesktopItem>> for ItemStore {
    /// Later duplicates of an id are dropped.
    fn from(items: Vec<DesktopItem>) -> Self {
        let mut store = Self::default();
        for item in items {
            store.insert(item);
        }
        store
    }
}

impl From<ItemStore> for Vec<DesktopItem> {
    fn from(store: ItemStore) -> Self {
        store.slots.into_iter().flatten().collect()
    }
}

impl FromIterator<DesktopItem> for ItemStore {
    fn from_iter<T: IntoIterator<Item = DesktopItem>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Desktop background: a built-in asset id or a self-contained content reference.
///
/// Stored with its variant so a source that does not look like a URI still reloads as the same
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "source", rename_all = "camelCase")]
pub enum Wallpaper {
    BuiltIn(String),
    Content(String),
}

impl Wallpaper {
    pub fn source(&self) -> &str {
        match self {
            Self::BuiltIn(id) | Self::Content(id) => id,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::BuiltIn(id) if id == DEFAULT_WALLPAPER_ID)
    }
}

impl Default for Wallpaper {
    fn default() -> Self {
        Self::BuiltIn(DEFAULT_WALLPAPER_ID.to_string())
    }
}

impl From<String> for Wallpaper {
    fn from(source: String) -> Self {
        if is_content_uri(&source) {
            Self::Content(source)
        } else {
            Self::BuiltIn(source)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Window geometry defaults and the icon grid height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Rows per icon-grid column before placement wraps to the next column.
    pub grid_rows: i32,
    pub window_origin_x: i32,
    pub window_origin_y: i32,
    /// Offset applied per already-open window when cascading a new one.
    pub cascade_step: i32,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_rows: DEFAULT_GRID_ROWS,
            window_origin_x: 100,
            window_origin_y: 80,
            cascade_step: 30,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Presentation state of one open folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderWindow {
    pub folder_id: ItemId,
    pub rect: WindowRect,
    /// Highest value renders frontmost.
    pub stack_order: u32,
    pub minimized: bool,
    pub fullscreen: bool,
}

impl FolderWindow {
    /// Geometry to render with; a fullscreen window covers `viewport` and keeps its stored rect
    /// for when fullscreen is left.
    pub fn effective_rect(&self, viewport: WindowRect) -> WindowRect {
        if self.fullscreen {
            viewport
        } else {
            self.rect
        }
    }
}

/// Restore affordance for a minimized window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockEntry {
    pub folder_id: ItemId,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextMenuTarget {
    Desktop,
    /// Background of an open folder window.
    Folder(ItemId),
    Item(ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuAction {
    ChangeBackground,
    NewFolder,
    UploadImage,
    UploadFile,
    Rename,
    Delete,
}

impl ContextMenuAction {
    /// Text shown for the action's menu entry.
    pub fn label(self) -> &'static str {
        match self {
            Self::ChangeBackground => "Change Background",
            Self::NewFolder => "New Folder",
            Self::UploadImage => "Upload Image",
            Self::UploadFile => "Upload File",
            Self::Rename => "Rename",
            Self::Delete => "Delete",
        }
    }
}

impl ContextMenuTarget {
    /// Actions offered for this target; depends only on the target kind.
    pub fn actions(&self) -> &'static [ContextMenuAction] {
        use ContextMenuAction::*;
        match self {
            Self::Desktop => &[ChangeBackground, NewFolder, UploadImage, UploadFile],
            Self::Folder(_) => &[UploadImage, UploadFile, NewFolder],
            Self::Item(_) => &[Rename, Delete],
        }
    }

    /// Scope that new folders and uploads created from this menu land in.
    pub fn creation_scope(&self) -> Option<ItemScope> {
        match self {
            Self::Desktop => Some(ItemScope::Desktop),
            Self::Folder(id) => Some(ItemScope::Folder(id.clone())),
            Self::Item(_) => None,
        }
    }

    fn references(&self, id: &ItemId) -> bool {
        matches!(self, Self::Folder(target) | Self::Item(target) if target == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuRequest {
    pub position: PointerPosition,
    pub target: ContextMenuTarget,
}

/// Ephemeral selection and context-menu state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DesktopFocus {
    #[default]
    Idle,
    Selected(ItemId),
    ContextMenu {
        menu: ContextMenuRequest,
        /// Selection to return to when the menu is dismissed.
        selected: Option<ItemId>,
    },
}

impl DesktopFocus {
    pub fn selected_item(&self) -> Option<&ItemId> {
        match self {
            Self::Idle => None,
            Self::Selected(id) => Some(id),
            Self::ContextMenu { selected, .. } => selected.as_ref(),
        }
    }

    pub fn context_menu(&self) -> Option<&ContextMenuRequest> {
        match self {
            Self::ContextMenu { menu, .. } => Some(menu),
            _ => None,
        }
    }

    pub(crate) fn references(&self, id: &ItemId) -> bool {
        self.selected_item() == Some(id)
            || self
                .context_menu()
                .is_some_and(|menu| menu.target.references(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub items: ItemStore,
    pub windows: Vec<FolderWindow>,
    /// Largest stack order handed out so far.
    pub max_stack_order: u32,
    pub focus: DesktopFocus,
    pub wallpaper: Wallpaper,
    /// Gates context menus and uploads.
    pub edit_mode: bool,
    /// Item shown in the image/file preview modal.
    pub preview: Option<ItemId>,
    pub layout: LayoutConfig,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            items: crate::defaults::default_items(),
            windows: Vec::new(),
            max_stack_order: 0,
            focus: DesktopFocus::Idle,
            wallpaper: Wallpaper::default(),
            edit_mode: true,
            preview: None,
            layout: LayoutConfig::default(),
        }
    }
}

impl DesktopState {
    pub fn item(&self, id: &ItemId) -> Option<&DesktopItem> {
        self.items.get(id)
    }

    pub fn desktop_items(&self) -> impl Iterator<Item = &DesktopItem> + '_ {
        self.items.iter().filter(|item| item.parent == ItemScope::Desktop)
    }

    pub fn folder_items<'s, 'k>(
        &'s self,
        folder_id: &'k ItemId,
    ) -> impl Iterator<Item = &'s DesktopItem> + 'k
    where
        's: 'k,
    {
        self.items
            .iter()
            .filter(move |item| item.parent.folder_id() == Some(folder_id))
    }

    pub fn window(&self, folder_id: &ItemId) -> Option<&FolderWindow> {
        self.windows.iter().find(|w| &w.folder_id == folder_id)
    }

    /// Title of the window for `folder_id`, read from the folder item itself.
    pub fn window_title(&self, folder_id: &ItemId) -> &str {
        self.item(folder_id)
            .map(|item| item.name.as_str())
            .unwrap_or(UNTITLED_WINDOW_TITLE)
    }

    /// Non-minimized windows ordered back to front.
    pub fn visible_windows(&self) -> Vec<&FolderWindow> {
        let mut visible: Vec<_> = self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.stack_order);
        visible
    }

    /// Minimized windows in the order they were opened.
    pub fn dock_entries(&self) -> Vec<DockEntry> {
        self.windows
            .iter()
            .filter(|w| w.minimized)
            .map(|w| DockEntry {
                folder_id: w.folder_id.clone(),
                title: self.window_title(&w.folder_id).to_string(),
            })
            .collect()
    }

    pub fn frontmost_window(&self) -> Option<&FolderWindow> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.stack_order)
    }

    pub fn selected_item_id(&self) -> Option<&ItemId> {
        self.focus.selected_item()
    }

    pub fn context_menu(&self) -> Option<&ContextMenuRequest> {
        self.focus.context_menu()
    }

    pub fn preview_item(&self) -> Option<&DesktopItem> {
        self.preview.as_ref().and_then(|id| self.item(id))
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot {
            items: self.items.clone(),
            wallpaper: self.wallpaper.clone(),
        }
    }
}

/// Durable part of the desktop: the item collection and the wallpaper.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopSnapshot {
    pub items: ItemStore,
    pub wallpaper: Wallpaper,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDragSession {
    pub folder_id: ItemId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<WindowDragSession>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn folder(id: &str, name: &str, parent: ItemScope) -> DesktopItem {
        DesktopItem {
            id: ItemId::new(id),
            name: name.to_string(),
            content: ItemContent::Folder,
            x: 1,
            y: 1,
            parent,
        }
    }

    #[test]
    fn item_serializes_in_flat_stored_layout() {
        let item = DesktopItem {
            id: ItemId::new("42"),
            name: "notes.txt".to_string(),
            content: ItemContent::File {
                url: "data:text/plain;base64,aGk=".to_string(),
                mime_type: Some("text/plain".to_string()),
            },
            x: 2,
            y: 3,
            parent: ItemScope::folder("1"),
        };

        let value = serde_json::to_value(&item).expect("serialize item");
        assert_eq!(
            value,
            json!({
                "id": "42",
                "name": "notes.txt",
                "type": "file",
                "fileUrl": "data:text/plain;base64,aGk=",
                "fileType": "text/plain",
                "x": 2,
                "y": 3,
                "parentId": "1",
            })
        );
    }

    #[test]
    fn desktop_root_items_store_null_parent() {
        let value = serde_json::to_value(folder("1", "Documents", ItemScope::Desktop))
            .expect("serialize folder");
        assert_eq!(value["parentId"], serde_json::Value::Null);
        assert_eq!(value["type"], "folder");
        assert!(value.get("imageUrl").is_none());
    }

    #[test]
    fn item_without_parent_field_lands_on_desktop() {
        let item: DesktopItem = serde_json::from_value(json!({
            "id": "9",
            "name": "shot.png",
            "type": "image",
            "imageUrl": "https://example.com/shot.png",
            "x": 1,
            "y": 2,
        }))
        .expect("deserialize image");
        assert_eq!(item.parent, ItemScope::Desktop);
        assert_eq!(item.kind(), ItemKind::Image);
        assert_eq!(item.content.url(), Some("https://example.com/shot.png"));
    }

    #[test]
    fn item_store_keeps_insertion_order_across_removals() {
        let mut store = ItemStore::default();
        for id in ["a", "b", "c", "d"] {
            assert!(store.insert(folder(id, id, ItemScope::Desktop)));
        }
        store.remove(&ItemId::new("b"));
        store.remove(&ItemId::new("c"));
        store.remove(&ItemId::new("a"));
        assert!(store.insert(folder("e", "e", ItemScope::Desktop)));

        let ids: Vec<_> = store.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "e"]);
        assert_eq!(store.len(), 2);
        assert!(store.get(&ItemId::new("e")).is_some());
        assert!(store.get(&ItemId::new("a")).is_none());
    }

    #[test]
    fn item_store_rejects_duplicate_ids() {
        let mut store = ItemStore::default();
        assert!(store.insert(folder("a", "first", ItemScope::Desktop)));
        assert!(!store.insert(folder("a", "second", ItemScope::Desktop)));
        assert_eq!(store.get(&ItemId::new("a")).map(|i| i.name.as_str()), Some("first"));
    }

    #[test]
    fn item_store_filters_by_scope() {
        let store: ItemStore = vec![
            folder("1", "Documents", ItemScope::Desktop),
            folder("2", "Inner", ItemScope::folder("1")),
            folder("3", "Photos", ItemScope::Desktop),
        ]
        .into_iter()
        .collect();

        let inner: Vec<_> = store
            .in_scope(&ItemScope::folder("1"))
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(inner, vec!["Inner"]);
        assert_eq!(store.in_scope(&ItemScope::Desktop).count(), 2);
    }

    #[test]
    fn folder_items_outlive_a_temporary_key() {
        let state = DesktopState::default();
        let names: Vec<&str> = state
            .folder_items(&ItemId::new("1"))
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["if_you_found_this.txt"]);

        let root: Vec<&DesktopItem> = state.items.in_scope(&ItemScope::Desktop).collect();
        assert_eq!(root.len(), 6);
    }

    #[test]
    fn wallpaper_classifies_sources() {
        assert_eq!(
            Wallpaper::from("data:image/png;base64,AAAA".to_string()),
            Wallpaper::Content("data:image/png;base64,AAAA".to_string())
        );
        assert_eq!(
            Wallpaper::from("https://example.com/bg.jpg".to_string()),
            Wallpaper::Content("https://example.com/bg.jpg".to_string())
        );
        assert_eq!(
            Wallpaper::from(DEFAULT_WALLPAPER_ID.to_string()),
            Wallpaper::default()
        );
        assert!(Wallpaper::default().is_default());
    }

    #[test]
    fn wallpaper_serializes_with_its_variant() {
        let relative = Wallpaper::Content("/wallpapers/forest.jpg".to_string());
        let value = serde_json::to_value(&relative).expect("serialize wallpaper");
        assert_eq!(
            value,
            json!({ "kind": "content", "source": "/wallpapers/forest.jpg" })
        );
        let back: Wallpaper = serde_json::from_value(value).expect("deserialize wallpaper");
        assert_eq!(back, relative);

        let value = serde_json::to_value(Wallpaper::default()).expect("serialize default");
        assert_eq!(value["kind"], "builtIn");
    }

    #[test]
    fn fullscreen_window_renders_at_viewport() {
        let viewport = WindowRect {
            x: 0,
            y: 24,
            w: 1440,
            h: 876,
        };
        let mut window = FolderWindow {
            folder_id: ItemId::new("1"),
            rect: WindowRect {
                x: 100,
                y: 80,
                w: 700,
                h: 500,
            },
            stack_order: 1,
            minimized: false,
            fullscreen: true,
        };
        assert_eq!(window.effective_rect(viewport), viewport);
        window.fullscreen = false;
        assert_eq!(window.effective_rect(viewport), window.rect);
    }

    #[test]
    fn context_menu_actions_depend_on_target_kind() {
        use ContextMenuAction::*;
        assert_eq!(
            ContextMenuTarget::Desktop.actions(),
            &[ChangeBackground, NewFolder, UploadImage, UploadFile]
        );
        assert_eq!(
            ContextMenuTarget::Folder(ItemId::new("1")).actions(),
            &[UploadImage, UploadFile, NewFolder]
        );
        assert_eq!(
            ContextMenuTarget::Item(ItemId::new("7")).actions(),
            &[Rename, Delete]
        );
        assert_eq!(ContextMenuTarget::Item(ItemId::new("7")).creation_scope(), None);
    }

    #[test]
    fn context_menu_entries_read_as_shown() {
        let desktop: Vec<_> = ContextMenuTarget::Desktop
            .actions()
            .iter()
            .map(|action| action.label())
            .collect();
        assert_eq!(
            desktop,
            vec!["Change Background", "New Folder", "Upload Image", "Upload File"]
        );
        let item: Vec<_> = ContextMenuTarget::Item(ItemId::new("7"))
            .actions()
            .iter()
            .map(|action| action.label())
            .collect();
        assert_eq!(item, vec!["Rename", "Delete"]);
    }
}
