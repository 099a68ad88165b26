//! Modal preview resolution for image and file items.

use leptos::logging;

use crate::{
    content::parse_data_url,
    model::{DesktopItem, ItemContent},
};

/// Inline text shown when a text preview cannot be loaded.
pub const TEXT_PREVIEW_PLACEHOLDER: &str = "Error loading file content";
/// Download file name used when an item has no usable name.
pub const FALLBACK_DOWNLOAD_NAME: &str = "download";

const TEXT_EXTENSIONS: [&str; 5] = ["txt", "md", "json", "xml", "csv"];

/// How the file preview modal renders a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Text,
    Pdf,
    Image,
    Video,
    Audio,
    /// No inline rendering; download and open-externally only.
    Other,
}

impl PreviewKind {
    pub fn classify(file_name: &str, mime_type: Option<&str>) -> Self {
        let mime = mime_type.unwrap_or_default();
        if mime.contains("text") || has_text_extension(file_name) {
            Self::Text
        } else if mime.contains("pdf") {
            Self::Pdf
        } else if mime.contains("image") {
            Self::Image
        } else if mime.contains("video") {
            Self::Video
        } else if mime.contains("audio") {
            Self::Audio
        } else {
            Self::Other
        }
    }
}

fn has_text_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| TEXT_EXTENSIONS.iter().any(|t| t.eq_ignore_ascii_case(ext)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemPreview {
    Image {
        name: String,
        url: String,
    },
    File {
        name: String,
        url: String,
        mime_type: Option<String>,
        kind: PreviewKind,
    },
}

impl ItemPreview {
    /// Preview for an image or file item; folders have none.
    pub fn for_item(item: &DesktopItem) -> Option<Self> {
        match &item.content {
            ItemContent::Folder => None,
            ItemContent::Image { url } => Some(Self::Image {
                name: item.name.clone(),
                url: url.clone(),
            }),
            ItemContent::File { url, mime_type } => Some(Self::File {
                name: item.name.clone(),
                url: url.clone(),
                kind: PreviewKind::classify(&item.name, mime_type.as_deref()),
                mime_type: mime_type.clone(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Image { name, .. } | Self::File { name, .. } => name,
        }
    }

    pub fn download_name(&self) -> &str {
        download_name(self.name())
    }
}

pub fn download_name(name: &str) -> &str {
    if name.trim().is_empty() {
        FALLBACK_DOWNLOAD_NAME
    } else {
        name
    }
}

/// Loads the text body of a text preview.
///
/// Only self-contained `data:` references can be read here; anything else, and any decoding
/// failure, yields [`TEXT_PREVIEW_PLACEHOLDER`]. Nothing is fetched: a text item whose url is
/// `https:`, `blob:` or a site path previews as the placeholder even when the target exists.
pub fn load_text_preview(url: &str) -> String {
    match parse_data_url(url).and_then(|data| data.decode_text()) {
        Ok(text) => text,
        Err(err) => {
            logging::warn!("text preview load failed: {err}");
            TEXT_PREVIEW_PLACEHOLDER.to_string()
        }
    }
}
