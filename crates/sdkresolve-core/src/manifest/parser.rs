//! Line scanner for the vendor `packages.config` manifest.
//!
//! The manifest is authored by a third party, so it is not parsed as XML.
//! Only lines naming a package in the vendor namespace matter; each one must
//! carry its identifier (up to the closing quote) followed somewhere later by
//! a `version="..."` token on the same line. Everything else is ignored.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::error::{ManifestError, PackageKind};

/// File name of the manifest inside a platform root.
pub const MANIFEST_FILE: &str = "packages.config";

/// Namespace prefix that marks a line as relevant.
pub const VENDOR_NAMESPACE: &str = "Microsoft.PlayFab.";

const VERSION_MARKER: &str = "version=\"";
const PARTY_KEYWORD: &str = "PlayFabParty";
const MULTIPLAYER_KEYWORD: &str = "Multiplayer";

/// One vendor package declared by the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub package: String,
    pub version: String,
}

impl ManifestEntry {
    /// Classify the package by keyword, `None` when neither matches.
    pub fn kind(&self) -> Option<PackageKind> {
        if self.package.contains(PARTY_KEYWORD) {
            Some(PackageKind::Party)
        } else if self.package.contains(MULTIPLAYER_KEYWORD) {
            Some(PackageKind::Multiplayer)
        } else {
            None
        }
    }

    /// Directory name the package is unpacked into: `<id>.<version>`.
    pub fn sub_path(&self) -> String {
        format!("{}.{}", self.package, self.version)
    }
}

/// Versioned sub-paths of the two packages a console build links against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackages {
    pub party: String,
    pub multiplayer: String,
}

/// Extract every vendor package from manifest text, in file order.
pub fn entries(text: &str) -> Result<Vec<ManifestEntry>, ManifestError> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Result<ManifestEntry, ManifestError>> {
    let start = line.find(VENDOR_NAMESPACE)?;
    let rest = &line[start..];
    let id_len = rest.find('"').unwrap_or(rest.len());
    let package = rest[..id_len].trim().to_string();

    let after_id = &rest[id_len..];
    let Some(marker) = after_id.find(VERSION_MARKER) else {
        return Some(Err(ManifestError::MissingVersion(package)));
    };
    let value = &after_id[marker + VERSION_MARKER.len()..];
    let version = value[..value.find('"').unwrap_or(value.len())].trim();
    if version.is_empty() {
        return Some(Err(ManifestError::MissingVersion(package)));
    }

    Some(Ok(ManifestEntry {
        package,
        version: version.to_string(),
    }))
}

/// Resolve the party and multiplayer sub-paths from manifest text.
///
/// The first declaration of each package wins.
pub fn parse_str(text: &str) -> Result<ResolvedPackages, ManifestError> {
    let found = entries(text)?;
    if found.is_empty() {
        return Err(ManifestError::NoRelevantEntries);
    }

    let mut party: Option<String> = None;
    let mut multiplayer: Option<String> = None;

    for entry in found {
        let slot = match entry.kind() {
            Some(PackageKind::Party) => &mut party,
            Some(PackageKind::Multiplayer) => &mut multiplayer,
            None => return Err(ManifestError::UnknownPackage(entry.package)),
        };
        let sub_path = entry.sub_path();
        match slot.as_deref() {
            Some(existing) if existing != sub_path => {
                warn!(kept = %existing, ignored = %sub_path, "Duplicate package declaration");
            }
            Some(_) => {}
            None => {
                debug!(package = %entry.package, version = %entry.version, "Manifest entry");
                *slot = Some(sub_path);
            }
        }
    }

    Ok(ResolvedPackages {
        party: party.ok_or(ManifestError::MissingPackage(PackageKind::Party))?,
        multiplayer: multiplayer.ok_or(ManifestError::MissingPackage(PackageKind::Multiplayer))?,
    })
}

/// Read and resolve a manifest file.
pub fn parse(path: &Path) -> Result<ResolvedPackages, ManifestError> {
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text)
}
