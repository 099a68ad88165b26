use desktop_runtime::{
    effect_executor::run_runtime_effects, load_boot_snapshot, reduce_desktop, ContentUpload,
    ContextMenuRequest, ContextMenuTarget, DesktopAction, DesktopState, InteractionState,
    ItemId, ItemKind, ItemPreview, ItemScope, PointerPosition, PreviewKind, RuntimeEffect,
    Wallpaper,
};
use futures::executor::block_on;
use platform_host::MemoryPrefsStore;

struct Session {
    state: DesktopState,
    interaction: InteractionState,
    store: MemoryPrefsStore,
}

impl Session {
    fn boot(store: MemoryPrefsStore) -> Self {
        let mut session = Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
            store,
        };
        let snapshot = block_on(load_boot_snapshot(&session.store));
        session.dispatch(DesktopAction::HydrateSnapshot { snapshot });
        session
    }

    fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        let effects = reduce_desktop(&mut self.state, &mut self.interaction, action);
        let snapshot = self.state.snapshot();
        block_on(run_runtime_effects(&self.store, &snapshot, effects.clone()));
        effects
    }

    fn id_named(&self, name: &str) -> ItemId {
        self.state
            .items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.id.clone())
            .expect("item by name")
    }
}

#[test]
fn default_desktop_opens_documents_then_photos() {
    let mut session = Session::boot(MemoryPrefsStore::default());
    let documents = session.id_named("Documents");
    let photos = session.id_named("Photos");

    session.dispatch(DesktopAction::OpenFolder {
        folder_id: documents.clone(),
    });
    session.dispatch(DesktopAction::OpenFolder {
        folder_id: photos.clone(),
    });

    let orders: Vec<_> = session
        .state
        .windows
        .iter()
        .map(|w| (w.folder_id.clone(), w.stack_order, w.minimized))
        .collect();
    assert_eq!(
        orders,
        vec![(documents.clone(), 1, false), (photos.clone(), 2, false)]
    );

    let note = session
        .state
        .folder_items(&documents)
        .next()
        .expect("note inside documents");
    assert_eq!(note.kind(), ItemKind::File);
    let image = session
        .state
        .folder_items(&photos)
        .next()
        .expect("image inside photos");
    assert_eq!(image.kind(), ItemKind::Image);
}

#[test]
fn edits_survive_a_reload() {
    let store = MemoryPrefsStore::default();
    let mut session = Session::boot(store.clone());
    let projects = session.id_named("THINGS I'M BUILDING");

    session.dispatch(DesktopAction::OpenContextMenu {
        menu: ContextMenuRequest {
            position: PointerPosition { x: 300, y: 200 },
            target: ContextMenuTarget::Folder(projects.clone()),
        },
    });
    let scope = session
        .state
        .context_menu()
        .and_then(|menu| menu.target.creation_scope())
        .expect("folder menu creates inside the folder");
    session.dispatch(DesktopAction::CreateFolder {
        parent: scope.clone(),
    });
    session.dispatch(DesktopAction::ImportUpload {
        parent: scope,
        upload: ContentUpload::new("plan.txt", "text/plain", b"ship it".to_vec()),
    });
    session.dispatch(DesktopAction::DismissContextMenu);

    let plan = session.id_named("plan.txt");
    session.dispatch(DesktopAction::RenameItem {
        item_id: plan.clone(),
        name: "roadmap.txt".to_string(),
    });
    session.dispatch(DesktopAction::SetWallpaper {
        wallpaper: Wallpaper::from("data:image/png;base64,iVBORw0KGgo=".to_string()),
    });

    let reloaded = Session::boot(store);
    assert_eq!(reloaded.state.items, session.state.items);
    assert_eq!(reloaded.state.wallpaper, session.state.wallpaper);

    let roadmap = reloaded.state.item(&plan).expect("renamed upload");
    assert_eq!(roadmap.name, "roadmap.txt");
    assert_eq!(roadmap.parent, ItemScope::Folder(projects.clone()));
    assert_eq!((roadmap.x, roadmap.y), (1, 2));

    let preview = ItemPreview::for_item(roadmap).expect("file preview");
    match preview {
        ItemPreview::File { kind, url, .. } => {
            assert_eq!(kind, PreviewKind::Text);
            assert_eq!(desktop_runtime::load_text_preview(&url), "ship it");
        }
        other => panic!("unexpected preview {other:?}"),
    }
}

#[test]
fn minimized_window_restores_from_dock_after_rename() {
    let mut session = Session::boot(MemoryPrefsStore::default());
    let music = session.id_named("Seun");

    session.dispatch(DesktopAction::ActivateItem {
        item_id: music.clone(),
    });
    session.dispatch(DesktopAction::ToggleMinimize {
        folder_id: music.clone(),
    });
    assert!(session.state.visible_windows().is_empty());

    session.dispatch(DesktopAction::RenameItem {
        item_id: music.clone(),
        name: "Playlists".to_string(),
    });
    let dock = session.state.dock_entries();
    assert_eq!(dock.len(), 1);
    assert_eq!(dock[0].title, "Playlists");

    session.dispatch(DesktopAction::ToggleMinimize {
        folder_id: music.clone(),
    });
    assert_eq!(session.state.visible_windows().len(), 1);
    assert_eq!(session.state.window_title(&music), "Playlists");
}

#[test]
fn undersized_stored_desktop_boots_with_defaults() {
    let store = MemoryPrefsStore::with_entries([
        (
            "desktop.items.v4",
            r#"[{"id":"1","name":"Only","type":"folder","x":0,"y":0,"parentId":null}]"#,
        ),
        ("desktop.wallpaper", "https://example.com/wall.jpg"),
    ]);
    let session = Session::boot(store);

    assert_eq!(session.state.items.len(), 8);
    assert_eq!(
        session.state.item(&ItemId::new("1")).map(|i| i.name.as_str()),
        Some("Documents")
    );
    assert_eq!(session.state.wallpaper.source(), "https://example.com/wall.jpg");
}
