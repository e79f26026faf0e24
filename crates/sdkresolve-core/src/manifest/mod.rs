//! Vendor package manifest parsing.

mod error;
mod parser;

pub use error::{ManifestError, PackageKind};
pub use parser::{
    MANIFEST_FILE, ManifestEntry, ResolvedPackages, VENDOR_NAMESPACE, entries, parse, parse_str,
};
