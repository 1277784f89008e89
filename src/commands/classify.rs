//! Classify command implementation

use console::Style;

use crate::cli::ClassifyArgs;
use crate::destination;
use crate::error::Result;
use crate::matcher;

/// Classify a file name against the transform naming convention.
///
/// Name-level only; nothing on disk is consulted.
pub fn run(args: ClassifyArgs) -> Result<()> {
    match matcher::classify(&args.name) {
        Some(prefix) => {
            println!(
                "{} is a supported transform",
                Style::new().bold().apply_to(&args.name)
            );
            println!("  {} {}", Style::new().bold().apply_to("Prefix:"), prefix);
            match destination::canonical_name(prefix) {
                Some(canonical) => {
                    println!(
                        "  {} {}",
                        Style::new().bold().apply_to("Destination:"),
                        canonical
                    );
                }
                None => {
                    println!(
                        "  {} no canonical destination for this prefix",
                        Style::new().bold().yellow().apply_to("Destination:")
                    );
                }
            }
        }
        None => {
            println!(
                "{} is not a supported transform",
                Style::new().bold().apply_to(&args.name)
            );
        }
    }

    Ok(())
}
