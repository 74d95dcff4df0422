//! Spellcaster CLI - directive-driven rewriting of build outputs
//!
//! Usage: spellcaster <COMMAND>
//!
//! Commands:
//!   cast     Apply directives to the build outputs of the given targets
//!   scan     List source files that carry directives
//!   targets  Validate targets and print what they resolve to

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::cast::{cmd_cast, CastArgs};
use commands::scan::cmd_scan;
use commands::targets::cmd_targets;
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    spellcaster::infrastructure::logging::init(cli.verbose);

    let session = Session::load(cli.project, cli.json, cli.verbose)?;

    match cli.command {
        Commands::Cast {
            targets,
            dry_run,
            stop_on_error,
            no_copy,
            concurrency,
            batch_size,
            paths,
        } => cmd_cast(
            &session,
            CastArgs {
                targets,
                dry_run,
                stop_on_error,
                no_copy,
                concurrency,
                batch_size,
                paths,
            },
        ),
        Commands::Scan => cmd_scan(&session),
        Commands::Targets { targets } => cmd_targets(&session, &targets),
    }
}
