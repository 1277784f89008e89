//! Apply command implementation

use console::Style;

use crate::cli::ApplyArgs;
use crate::engine::{self, CommandEngine};
use crate::error::{Result, XdtError};
use crate::gate::{self, GateDecision, Selection};

/// Re-run the gate and, if it passes, hand the resolved pair to the engine.
pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    let selection = Selection {
        project_path: args.project,
        item_path: args.file,
    };

    if verbose {
        eprintln!(
            "Gating {} against {}",
            selection.item_path.display(),
            selection.project_path.display()
        );
    }

    let mapping = match gate::evaluate(&selection)? {
        GateDecision::Enabled(mapping) => mapping,
        GateDecision::Disabled(reason) => {
            return Err(XdtError::NotApplicable {
                reason: reason.to_string(),
            });
        }
    };

    let engine = CommandEngine::new(args.engine);
    engine::apply_in_place(&engine, &mapping)?;

    println!(
        "{} {} {} {}",
        Style::new().bold().green().apply_to("Applied"),
        dunce::simplified(&mapping.transform_path).display(),
        Style::new().bold().apply_to("onto"),
        dunce::simplified(&mapping.destination_path).display()
    );

    Ok(())
}
