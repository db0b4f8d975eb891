//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the page assemblers.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_build_report, format_contacts, format_paths};
pub use route::RunContext;
