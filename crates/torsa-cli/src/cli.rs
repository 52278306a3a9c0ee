use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "torsa - hindered-rotor scan preparation for automated reaction-kinetics workflows.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare the hindered-rotor scans for one species.
    Prep(PrepArgs),
    /// Compute a reaction energy from stored reagent conformers.
    Energy(EnergyArgs),
}

#[derive(Args, Debug)]
pub struct PrepArgs {
    /// Path to the TOML input document (structure, species, scan settings).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Theory-level path of the conformer store to resolve torsions from.
    #[arg(short, long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Enumerate every grid point of the prepared scans.
    #[arg(long)]
    pub expand: bool,
}

#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Theory-level store path of a reactant (repeatable).
    #[arg(short, long = "reactant", required = true, value_name = "PATH")]
    pub reactants: Vec<PathBuf>,

    /// Theory-level store path of a product (repeatable).
    #[arg(short, long = "product", required = true, value_name = "PATH")]
    pub products: Vec<PathBuf>,
}
