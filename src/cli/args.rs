//! CLI argument definitions using clap
//!
//! The record keeping itself is menu-driven; the command line only carries
//! startup flags.

use clap::Parser;
use clap_complete::Shell;

/// Console record keeping for a veterinary clinic: owners, veterinarians, animals, and appointments
#[derive(Parser, Debug)]
#[command(name = "pawclinic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase debug output (repeat for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
