use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MANIFEST_FILE: &str = "default_desktop.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DefaultDesktopManifest {
    schema_version: u32,
    items: Vec<DefaultItemEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DefaultItemEntry {
    id: String,
    name: String,
    kind: String,
    x: i32,
    y: i32,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}

fn validate(manifest: &DefaultDesktopManifest) -> Result<(), String> {
    if manifest.schema_version != 1 {
        return Err(format!(
            "schema mismatch: expected 1 found {}",
            manifest.schema_version
        ));
    }
    if manifest.items.is_empty() {
        return Err("default desktop must contain at least one item".to_string());
    }

    let mut kinds = HashMap::new();
    for entry in &manifest.items {
        if kinds.insert(entry.id.as_str(), entry.kind.as_str()).is_some() {
            return Err(format!("duplicate item id `{}`", entry.id));
        }
    }

    for entry in &manifest.items {
        match (entry.kind.as_str(), &entry.url, &entry.text) {
            ("folder", None, None) => {}
            ("folder", _, _) => return Err(format!("folder `{}` carries content", entry.id)),
            ("image", Some(_), None) => {}
            ("image", _, _) => return Err(format!("image `{}` needs exactly a url", entry.id)),
            ("file", Some(_), None) | ("file", None, Some(_)) => {}
            ("file", _, _) => {
                return Err(format!("file `{}` needs either a url or text", entry.id))
            }
            (other, _, _) => return Err(format!("item `{}` has unknown kind `{other}`", entry.id)),
        }
        if let Some(parent) = &entry.parent {
            match kinds.get(parent.as_str()) {
                Some(&"folder") => {}
                Some(_) => return Err(format!("parent `{parent}` of `{}` is not a folder", entry.id)),
                None => return Err(format!("parent `{parent}` of `{}` does not exist", entry.id)),
            }
        }
    }

    let parents: HashMap<&str, &str> = manifest
        .items
        .iter()
        .filter_map(|entry| entry.parent.as_deref().map(|p| (entry.id.as_str(), p)))
        .collect();
    for entry in &manifest.items {
        let mut seen = HashSet::new();
        let mut cursor = entry.id.as_str();
        while let Some(parent) = parents.get(cursor) {
            if !seen.insert(cursor) {
                return Err(format!("containment cycle through `{}`", entry.id));
            }
            cursor = parent;
        }
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join(MANIFEST_FILE);
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DefaultDesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&manifest) {
        panic!("invalid {}: {err}", path.display());
    }

    let json = serde_json::to_string_pretty(&manifest.items).expect("serialize default desktop");
    let generated = format!(
        "/// Build-time generated default desktop item manifest JSON.\n\
pub const DEFAULT_DESKTOP_ITEMS_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("default_desktop_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
