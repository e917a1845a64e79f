//! Package names and dist coordinates parsed from Composer paths.

use super::{ComposerDomainError, DIRECT_DISTS_DIR, METADATA_DIR};
use std::fmt;

/// Archive format of a dist file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveExtension {
    /// `.zip`
    Zip,
    /// `.tar`
    Tar,
    /// `.tgz`
    Tgz,
    /// `.tar.gz`
    TarGz,
}

impl ArchiveExtension {
    const PROBE_ORDER: [Self; 4] = [Self::TarGz, Self::Tgz, Self::Tar, Self::Zip];

    /// Returns the file extension without the leading dot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar => "tar",
            Self::Tgz => "tgz",
            Self::TarGz => "tar.gz",
        }
    }

    /// Returns the Composer `dist.type` for the archive.
    #[must_use]
    pub const fn dist_type(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar | Self::Tgz | Self::TarGz => "tar",
        }
    }

    /// Splits `file` into its stem and archive extension.
    #[must_use]
    pub fn split(file: &str) -> Option<(&str, Self)> {
        Self::PROBE_ORDER.into_iter().find_map(|extension| {
            file.strip_suffix(extension.as_str())
                .and_then(|rest| rest.strip_suffix('.'))
                .filter(|stem| !stem.is_empty())
                .map(|stem| (stem, extension))
        })
    }
}

impl fmt::Display for ArchiveExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composer package name, `vendor/package`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName {
    vendor: String,
    package: String,
}

impl PackageName {
    /// Creates a package name from its two segments.
    ///
    /// Returns `None` when either segment is not a plain path segment.
    #[must_use]
    pub fn new(vendor: &str, package: &str) -> Option<Self> {
        (is_segment(vendor) && is_segment(package)).then(|| Self {
            vendor: vendor.to_owned(),
            package: package.to_owned(),
        })
    }

    /// Parses `/p/vendor/package.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerDomainError::InvalidMetadataPath`] for any other
    /// shape.
    pub fn from_metadata_path(uri: &str) -> Result<Self, ComposerDomainError> {
        let invalid = || ComposerDomainError::InvalidMetadataPath(uri.to_owned());
        let relative = uri
            .trim_start_matches('/')
            .strip_prefix(METADATA_DIR)
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(|rest| rest.strip_suffix(".json"))
            .ok_or_else(invalid)?;
        let (vendor, package) = relative.split_once('/').ok_or_else(invalid)?;
        Self::new(vendor, package).ok_or_else(invalid)
    }

    /// Returns the vendor segment.
    #[must_use]
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Returns the package segment.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the storage path of the package metadata document.
    #[must_use]
    pub fn metadata_path(&self) -> String {
        format!("{METADATA_DIR}/{self}.json")
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vendor, self.package)
    }
}

/// Package, version and archive format addressed by a dist path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageCoordinates {
    name: PackageName,
    version: String,
    extension: ArchiveExtension,
}

impl PackageCoordinates {
    /// Parses `/[direct-dists/]vendor/package/version.(zip|tar|tgz|tar.gz)`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerDomainError::InvalidDistPath`] for any other shape.
    pub fn from_dist_path(uri: &str) -> Result<Self, ComposerDomainError> {
        let invalid = || ComposerDomainError::InvalidDistPath(uri.to_owned());
        let trimmed = uri.trim_start_matches('/');
        let relative = trimmed
            .strip_prefix(DIRECT_DISTS_DIR)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(trimmed);
        let mut segments = relative.split('/');
        let (Some(vendor), Some(package), Some(file), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(invalid());
        };
        let (version, extension) = ArchiveExtension::split(file).ok_or_else(invalid)?;
        if !is_segment(version) {
            return Err(invalid());
        }
        let name = PackageName::new(vendor, package).ok_or_else(invalid)?;
        Ok(Self {
            name,
            version: version.to_owned(),
            extension,
        })
    }

    /// Returns the package name.
    #[must_use]
    pub const fn name(&self) -> &PackageName {
        &self.name
    }

    /// Returns the package version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the archive format.
    #[must_use]
    pub const fn extension(&self) -> ArchiveExtension {
        self.extension
    }

    /// Returns the storage path of the dist archive.
    #[must_use]
    pub fn dist_path(&self) -> String {
        format!(
            "{DIRECT_DISTS_DIR}/{}/{}.{}",
            self.name, self.version, self.extension
        )
    }
}

/// Returns `true` when `value` is usable as one path segment.
pub(super) fn is_segment(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+'))
}
