//! Selection gating
//!
//! Decides whether "apply transform in place" is available for a selected
//! project item. Every evaluation is a pure function of the selection plus
//! the filesystem at that moment; nothing is carried between selections.

use std::fmt;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::destination::{self, DestinationMapping};
use crate::error::{Result, XdtError};
use crate::matcher;

/// Project extensions that support config transforms
const SUPPORTED_PROJECT_EXTENSIONS: &[&str] = &["csproj", "vbproj", "fsproj"];

/// A single selected project item, as reported by the host
#[derive(Debug, Clone)]
pub struct Selection {
    /// Full path of the owning project file
    pub project_path: PathBuf,
    /// Full path of the selected item
    pub item_path: PathBuf,
}

/// Why a selection was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    /// The owning project type does not support transforms
    UnsupportedProject,
    /// The selected item is not a .config file
    NotAConfig,
    /// The selected item is not well-formed XML
    MalformedXml,
    /// No destination file exists for the transform's prefix
    NoDestination,
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisabledReason::UnsupportedProject => {
                write!(f, "project type does not support transforms")
            }
            DisabledReason::NotAConfig => write!(f, "selected item is not a .config file"),
            DisabledReason::MalformedXml => write!(f, "selected item is not well-formed XML"),
            DisabledReason::NoDestination => {
                write!(f, "no destination file exists for the transform")
            }
        }
    }
}

/// Outcome of gating a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The transform can be applied; carries the resolved pair
    Enabled(DestinationMapping),
    /// The transform cannot be applied
    Disabled(DisabledReason),
}

/// Whether the project's type supports config transforms.
pub fn project_supports_transforms(project_path: &Path) -> bool {
    project_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_PROJECT_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Probe a file for XML well-formedness.
///
/// Doctype declarations are consumed lexically and never resolved, so a
/// transform referencing an external DTD cannot trigger a network fetch.
/// A parse failure means "not XML", not an error; a missing file at this
/// point is an error.
pub fn is_xml_file(path: &Path) -> Result<bool> {
    if path.as_os_str().is_empty() {
        return Err(XdtError::InvalidPath {
            reason: "empty path passed to XML well-formedness check".to_string(),
        });
    }
    if !path.is_file() {
        return Err(XdtError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = match Reader::from_file(path) {
        Ok(reader) => reader,
        Err(_) => return Ok(false),
    };

    // quick-xml lexes leniently, so enforce the document grammar here:
    // exactly one root element, no content outside it.
    let mut depth = 0usize;
    let mut root_elements = 0usize;
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => return Ok(root_elements == 1 && depth == 0),
            Ok(Event::Start(_)) => {
                if depth == 0 {
                    root_elements += 1;
                }
                depth += 1;
            }
            Ok(Event::End(_)) => {
                depth = match depth.checked_sub(1) {
                    Some(depth) => depth,
                    None => return Ok(false),
                };
            }
            Ok(Event::Empty(_)) => {
                if depth == 0 {
                    root_elements += 1;
                }
            }
            Ok(Event::Text(text)) => {
                if depth == 0 && !text.iter().all(|b| b.is_ascii_whitespace()) {
                    return Ok(false);
                }
            }
            Ok(Event::CData(_)) => {
                if depth == 0 {
                    return Ok(false);
                }
            }
            // Declarations, comments, doctypes and PIs are fine anywhere
            // the reader accepts them.
            Ok(_) => {}
            Err(_) => return Ok(false),
        }
        buf.clear();
    }
}

/// Gate a selection through the full decision chain.
///
/// 1. The owning project must be a supported type.
/// 2. The item must be a `.config` file and well-formed XML.
/// 3. The item's name must classify as a transform whose destination file
///    exists next to it.
pub fn evaluate(selection: &Selection) -> Result<GateDecision> {
    if !project_supports_transforms(&selection.project_path) {
        return Ok(GateDecision::Disabled(DisabledReason::UnsupportedProject));
    }

    let Some(file_name) = selection.item_path.file_name().and_then(|n| n.to_str()) else {
        return Ok(GateDecision::Disabled(DisabledReason::NotAConfig));
    };

    // The suffix check stands on its own; the transform naming convention
    // is only consulted once the item is known to be a config file.
    if !file_name.to_ascii_lowercase().ends_with(".config") {
        return Ok(GateDecision::Disabled(DisabledReason::NotAConfig));
    }

    if !is_xml_file(&selection.item_path)? {
        return Ok(GateDecision::Disabled(DisabledReason::MalformedXml));
    }

    let mapping = matcher::classify(file_name)
        .and_then(|prefix| destination::resolve(&selection.item_path, prefix));

    match mapping {
        Some(mapping) if mapping.exists => Ok(GateDecision::Enabled(mapping)),
        _ => Ok(GateDecision::Disabled(DisabledReason::NoDestination)),
    }
}
