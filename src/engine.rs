//! Transform engine invocation
//!
//! The XML merge itself is someone else's job. This module owns the seam:
//! a `TransformEngine` trait, an implementation that shells out to an
//! external engine program, and the in-place invocation that always hands
//! the engine `(destination, transform, destination)`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::destination::DestinationMapping;
use crate::error::{Result, XdtError};

/// An XML document-transform engine.
///
/// `transform` merges `transform` into `original` and writes the result to
/// `output`. Implementations are handed `output == original` by this crate.
pub trait TransformEngine {
    fn transform(&self, original: &Path, transform: &Path, output: &Path) -> Result<()>;
}

/// Engine that delegates to an external program.
///
/// The program is invoked as `<program> <original> <transform> <output>`
/// and must exit zero on success.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: PathBuf,
}

impl CommandEngine {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }
}

impl TransformEngine for CommandEngine {
    fn transform(&self, original: &Path, transform: &Path, output: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .arg(original)
            .arg(transform)
            .arg(output)
            .status()
            .map_err(|e| XdtError::EngineFailed {
                program: self.program.display().to_string(),
                reason: format!("failed to start: {e}"),
            })?;

        if !status.success() {
            return Err(XdtError::EngineFailed {
                program: self.program.display().to_string(),
                reason: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Apply a resolved transform in place.
///
/// The engine receives the destination as both original and output, so the
/// merged result overwrites the destination file. No-op with a diagnostic
/// when either path of the pair is empty; engine failures propagate as-is.
pub fn apply_in_place(engine: &dyn TransformEngine, mapping: &DestinationMapping) -> Result<()> {
    if mapping.transform_path.as_os_str().is_empty()
        || mapping.destination_path.as_os_str().is_empty()
    {
        eprintln!("Transform or destination path is unset. Nothing to do.");
        return Ok(());
    }

    engine.transform(
        &mapping.destination_path,
        &mapping.transform_path,
        &mapping.destination_path,
    )
}
