//! Command line interface for the `pet-friends-suite` binary.

use clap::Parser;
use pet_friends::ScenarioId;

/// Command line arguments for the `pet-friends-suite` binary.
///
/// Credentials and the service URL come from `PET_FRIENDS_*` environment
/// variables, not from flags.
#[derive(Debug, Parser)]
#[command(
    name = "pet-friends-suite",
    version,
    about = "Run the PetFriends functional scenarios against the live service"
)]
pub struct Cli {
    /// Scenarios to run, by name. Runs the whole catalog when omitted.
    #[arg(value_name = "SCENARIO")]
    pub scenarios: Vec<ScenarioId>,

    /// Print the scenario catalog and exit.
    #[arg(short, long)]
    pub list: bool,
}
