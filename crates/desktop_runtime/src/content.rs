//! Content references for uploaded images and files.
//!
//! Uploads become self-contained `data:` URLs before they are stored on an item, so the item
//! store never needs to know where bytes came from.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use crate::model::ItemContent;

/// Media type used when an upload does not report one.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

const CONTENT_URI_PREFIXES: [&str; 4] = ["data:", "http://", "https://", "blob:"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("`{0}` is not a data URL")]
    NotDataUrl(String),
    #[error("data URL has no `,` separating header and payload")]
    MissingPayload,
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
    #[error("invalid percent escape at byte {0}")]
    InvalidPercentEscape(usize),
    #[error("content is not valid UTF-8")]
    NotUtf8,
}

/// Returns whether `source` is a content reference rather than a built-in asset id.
pub fn is_content_uri(source: &str) -> bool {
    CONTENT_URI_PREFIXES
        .iter()
        .any(|prefix| source.starts_with(prefix))
}

/// Raw bytes handed over by the environment (file picker or drop target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUpload {
    pub file_name: String,
    /// Reported media type; may be empty.
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ContentUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn data_url(&self) -> String {
        let mime = if self.mime_type.is_empty() {
            FALLBACK_MIME_TYPE
        } else {
            &self.mime_type
        };
        encode_data_url(mime, &self.bytes)
    }

    /// Image uploads become image items; everything else becomes a file item.
    pub fn to_item_content(&self) -> ItemContent {
        let url = self.data_url();
        if self.is_image() {
            ItemContent::Image { url }
        } else {
            ItemContent::File {
                url,
                mime_type: (!self.mime_type.is_empty()).then(|| self.mime_type.clone()),
            }
        }
    }
}

pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Header fields of a parsed `data:` URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUrl<'a> {
    /// Media type without parameters; empty when the URL omits it.
    pub mime_type: &'a str,
    pub base64: bool,
    pub payload: &'a str,
}

impl DataUrl<'_> {
    pub fn decode(&self) -> Result<Vec<u8>, ContentError> {
        if self.base64 {
            STANDARD
                .decode(self.payload.trim())
                .map_err(|e| ContentError::InvalidBase64(e.to_string()))
        } else {
            percent_decode(self.payload)
        }
    }

    pub fn decode_text(&self) -> Result<String, ContentError> {
        String::from_utf8(self.decode()?).map_err(|_| ContentError::NotUtf8)
    }
}

pub fn parse_data_url(url: &str) -> Result<DataUrl<'_>, ContentError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| ContentError::NotDataUrl(truncate_for_error(url)))?;
    let (header, payload) = rest.split_once(',').ok_or(ContentError::MissingPayload)?;
    let mut params = header.split(';');
    let mime_type = params.next().unwrap_or_default().trim();
    let base64 = params.any(|param| param.trim().eq_ignore_ascii_case("base64"));
    Ok(DataUrl {
        mime_type,
        base64,
        payload,
    })
}

fn percent_decode(input: &str) -> Result<Vec<u8>, ContentError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'%' => {
                let hex = bytes
                    .get(pos + 1..pos + 3)
                    .and_then(|pair| std::str::from_utf8(pair).ok())
                    .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                    .ok_or(ContentError::InvalidPercentEscape(pos))?;
                out.push(hex);
                pos += 3;
            }
            byte => {
                out.push(byte);
                pos += 1;
            }
        }
    }
    Ok(out)
}

fn truncate_for_error(url: &str) -> String {
    url.chars().take(32).collect()
}
