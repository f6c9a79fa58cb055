//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Turn command outcomes that are not errors into exit codes.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Mapping errors to exit codes (see `error` module).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.
//! - `status` exits with `NotConfigured` when no secrets directory is set.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<ExitCode> {
    let overrides = cli.overrides();
    match cli.command {
        Commands::Status => {
            if !commands::status::run(&overrides, &cli.output)? {
                return Ok(ExitCode::NotConfigured);
            }
        }
        Commands::Resolve => commands::resolve::run(&overrides, &cli.output)?,
        Commands::Doctor => commands::doctor::run(&overrides, &cli.output)?,
        Commands::Render { reveal_secrets } => commands::render::run(&overrides, reveal_secrets)?,
    }
    Ok(ExitCode::Success)
}
