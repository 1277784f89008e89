//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// xdt-apply - apply config transforms in place
#[derive(Parser, Debug)]
#[command(
    name = "xdt-apply",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Apply XML configuration transforms onto their destination file in place",
    long_about = "xdt-apply resolves a config transform file (app.Release.config, \
                  web.Staging.config, ...) to its destination (App.config, Web.config), \
                  checks that the transform is eligible for the owning project, and hands \
                  the pair to an external XML document-transform engine for an in-place merge.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  xdt-apply check src/App.Release.config --project src/MyApp.csproj\n    \
                  xdt-apply apply src/App.Release.config --project src/MyApp.csproj --engine xdt-engine\n    \
                  xdt-apply classify app.Dev-1.config"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a transform can be applied to its destination
    Check(CheckArgs),

    /// Apply a transform onto its destination file, in place
    Apply(ApplyArgs),

    /// Classify a file name against the transform naming convention
    Classify(ClassifyArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The transform file to check
    pub file: PathBuf,

    /// The project file owning the selection (.csproj, .vbproj or .fsproj)
    #[arg(long, short = 'p')]
    pub project: PathBuf,
}

/// Arguments for the apply command
#[derive(Parser, Debug)]
#[command(after_help = "The engine program is invoked as:\n    \
                        <engine> <original> <transform> <output>\n\n\
                        xdt-apply always passes the destination file as both original and \
                        output, so the merge result overwrites the destination.")]
pub struct ApplyArgs {
    /// The transform file to apply
    pub file: PathBuf,

    /// The project file owning the selection (.csproj, .vbproj or .fsproj)
    #[arg(long, short = 'p')]
    pub project: PathBuf,

    /// External document-transform engine program
    #[arg(long, env = "XDT_APPLY_ENGINE")]
    pub engine: PathBuf,
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// File name (not a path) to classify
    pub name: String,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
