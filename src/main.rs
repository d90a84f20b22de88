//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use dfs_lineup::{
    cli::{Commands, DfsLineup},
    commands::{
        export::{handle_check_export, handle_export},
        lineup::{
            handle_delete, handle_list, handle_new, handle_rename, handle_set, handle_status,
            handle_tag,
        },
        validate::{handle_show, handle_validate},
        CommandContext,
    },
};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries CSV and JSON output.
fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = DfsLineup::parse();
    init_logging(&app.log_level);

    let mut ctx = CommandContext::new(app.config.as_deref(), app.db.as_deref())?;

    match app.command {
        Commands::New { week, name, tags } => {
            handle_new(&mut ctx, week, &name, &tags)?;
        }

        Commands::Set {
            lineup,
            slot,
            player,
            clear,
        } => {
            // clap guarantees exactly one of --player / --clear
            let player = if clear { None } else { player };
            handle_set(&mut ctx, lineup, &slot, player)?
        }

        Commands::Tag {
            lineup,
            add,
            remove,
        } => handle_tag(&mut ctx, lineup, &add, &remove)?,

        Commands::Rename { lineup, name } => handle_rename(&mut ctx, lineup, &name)?,

        Commands::Show {
            lineup,
            pool,
            json,
        } => handle_show(&ctx, lineup, &pool, json)?,

        Commands::Validate {
            selection,
            pool,
            json,
        } => {
            if !handle_validate(&ctx, &selection, &pool, json)? {
                std::process::exit(1);
            }
        }

        Commands::Export {
            selection,
            pool,
            out,
            header,
        } => {
            handle_export(&mut ctx, &selection, &pool, out.as_deref(), header)?;
        }

        Commands::Status { lineup, to } => handle_status(&mut ctx, lineup, to)?,

        Commands::List { week, json } => handle_list(&ctx, week, json)?,

        Commands::Delete { lineup } => handle_delete(&mut ctx, lineup)?,

        Commands::CheckExport { file } => {
            handle_check_export(&ctx, &file)?;
        }
    }

    Ok(())
}
