//! Destination file resolution
//!
//! Maps a transform's destination prefix to the canonical destination file
//! name and checks that the destination actually exists next to the
//! transform.

use std::path::{Path, PathBuf};

/// A resolved transform/destination pair.
///
/// `destination_path` always sits in the same directory as the transform;
/// `exists` reflects the filesystem at resolution time and is never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationMapping {
    /// The transform file the user selected
    pub transform_path: PathBuf,
    /// The canonical destination file the transform merges into
    pub destination_path: PathBuf,
    /// Whether the destination file is present on disk
    pub exists: bool,
}

/// Canonical destination file name for a recognized prefix.
///
/// Only `web.` and `app.` carry a canonical name today. Other prefixes the
/// naming convention accepts (e.g. `saml.`) have no mapping; extending this
/// match is the single place to add one.
pub fn canonical_name(prefix: &str) -> Option<&'static str> {
    if prefix.eq_ignore_ascii_case("web.") {
        Some("Web.config")
    } else if prefix.eq_ignore_ascii_case("app.") {
        Some("App.config")
    } else {
        None
    }
}

/// Resolve the destination for a transform file.
///
/// The destination path is derived by substituting the transform's own file
/// name inside `transform_path` with the canonical name, so the destination
/// keeps the exact directory text of the original selection. Returns `None`
/// when the prefix has no canonical mapping or the path has no usable file
/// name.
pub fn resolve(transform_path: &Path, prefix: &str) -> Option<DestinationMapping> {
    let canonical = canonical_name(prefix)?;
    let file_name = transform_path.file_name()?.to_str()?;
    let path_text = transform_path.to_str()?;

    // Substitute the base name segment textually. The file name is the last
    // path component, so replace its final occurrence.
    let start = path_text.rfind(file_name)?;
    let mut destination_text = String::with_capacity(path_text.len());
    destination_text.push_str(&path_text[..start]);
    destination_text.push_str(canonical);
    destination_text.push_str(&path_text[start + file_name.len()..]);

    let destination_path = PathBuf::from(destination_text);
    let exists = destination_path.is_file();

    Some(DestinationMapping {
        transform_path: transform_path.to_path_buf(),
        destination_path,
        exists,
    })
}
