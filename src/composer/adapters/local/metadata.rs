//! Composer JSON documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-package metadata document served at `/p/vendor/package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Versions keyed by package name, then version.
    pub packages: BTreeMap<String, BTreeMap<String, VersionEntry>>,
}

impl PackageMetadata {
    /// Records a version, replacing any previous entry for it.
    pub fn insert(&mut self, entry: VersionEntry) {
        self.packages
            .entry(entry.name.clone())
            .or_default()
            .insert(entry.version.clone(), entry);
    }
}

/// One released version of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Package name, `vendor/package`.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Download location of the archive.
    pub dist: DistEntry,
    /// Upload time.
    pub time: DateTime<Utc>,
}

/// Dist archive reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistEntry {
    /// Archive format, `zip` or `tar`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Absolute download URL.
    pub url: String,
    /// SHA-256 digest of the archive.
    pub sha256: String,
}

/// Repository index served at `/packages.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryIndex {
    /// Search endpoint template.
    pub search: String,
    /// Metadata URL template for lazily loaded packages.
    #[serde(rename = "providers-lazy-url")]
    pub providers_lazy_url: String,
    /// Inline packages, always empty.
    pub packages: Vec<serde_json::Value>,
}

impl RepositoryIndex {
    /// Builds the index for a repository served at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            search: format!("{base_url}/search.json?q=%query%&type=%type%"),
            providers_lazy_url: format!("{base_url}/p/%package%.json"),
            packages: Vec::new(),
        }
    }
}
