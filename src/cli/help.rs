//! CLI help and command-name contract for log spans.

use crate::cli::parse::Commands;

/// Command name string for logs (e.g. "photographer", "build").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Home => "home",
        Commands::Photographer { .. } => "photographer",
        Commands::Paths { .. } => "paths",
        Commands::Director { .. } => "director",
        Commands::Contacts { .. } => "contacts",
        Commands::Build { .. } => "build",
    }
}
