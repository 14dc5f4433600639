//! Web app manifest `icons` fragment
//!
//! Mirrors the `icons` member of the W3C Web App Manifest so the generated
//! files can be pasted straight into `manifest.json`.

use crate::error::IconError;
use crate::icon_set::IconEntry;
use serde::Serialize;
use std::path::Path;

pub const MANIFEST_FILE_NAME: &str = "manifest-icons.json";

/// Root of the written file: `{ "icons": [...] }`
#[derive(Serialize, Debug, Clone, Default)]
pub struct ManifestIcons {
    pub icons: Vec<ManifestIcon>,
}

/// A single image resource of the manifest
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestIcon {
    /// URL of the icon, relative to the site root (e.g. "/icon-192x192.png")
    pub src: String,

    /// Space separated `WxH` list (e.g. "192x192")
    pub sizes: String,

    /// MIME type of the icon
    #[serde(rename = "type")]
    pub mime_type: String,

    /// "any" or "maskable"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl ManifestIcon {
    /// Builds the manifest record for an icon set entry.
    ///
    /// Returns `None` for entries that are not advertised in the manifest
    /// (e.g. the apple touch icon).
    pub fn from_entry(entry: &IconEntry) -> Option<Self> {
        let purpose = entry.purpose?;
        Some(Self {
            src: format!("/{}", entry.file_name),
            sizes: format!("{0}x{0}", entry.size),
            mime_type: "image/png".to_string(),
            purpose: Some(purpose.as_str().to_string()),
        })
    }
}

impl ManifestIcons {
    pub fn from_entries(entries: &[IconEntry]) -> Self {
        Self {
            icons: entries.iter().filter_map(ManifestIcon::from_entry).collect(),
        }
    }
}

/// Writes `manifest-icons.json` into `dir`, overwriting any previous copy.
pub fn write_manifest_json(dir: &Path, entries: &[IconEntry]) -> Result<(), IconError> {
    let manifest = ManifestIcons::from_entries(entries);
    let json = serde_json::to_string_pretty(&manifest)?;

    let path = dir.join(MANIFEST_FILE_NAME);
    std::fs::write(&path, json).map_err(|source| IconError::Write { path, source })
}
