//! Check command implementation

use console::Style;

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::gate::{self, GateDecision, Selection};
use crate::matcher;

/// Run the gate for a selection and report the decision.
///
/// A disabled selection is a normal answer, not a failure; only missing
/// files and invalid paths exit non-zero.
pub fn run(args: CheckArgs, verbose: bool) -> Result<()> {
    let selection = Selection {
        project_path: args.project,
        item_path: args.file,
    };

    if verbose {
        let name = selection
            .item_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        match matcher::classify(name) {
            Some(prefix) => eprintln!("{name} is a supported transform (prefix {prefix})"),
            None => eprintln!("{name} is NOT a supported transform"),
        }
    }

    match gate::evaluate(&selection)? {
        GateDecision::Enabled(mapping) => {
            println!("{}", Style::new().bold().green().apply_to("enabled"));
            println!(
                "  {} {}",
                Style::new().bold().apply_to("Transform:"),
                dunce::simplified(&mapping.transform_path).display()
            );
            println!(
                "  {} {}",
                Style::new().bold().apply_to("Destination:"),
                dunce::simplified(&mapping.destination_path).display()
            );
        }
        GateDecision::Disabled(reason) => {
            println!(
                "{} {}",
                Style::new().bold().yellow().apply_to("disabled:"),
                reason
            );
        }
    }

    Ok(())
}
