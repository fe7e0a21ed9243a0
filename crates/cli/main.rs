use clap::CommandFactory;
use clap::Parser;
use color_eyre::Result;
use config::{Config, ProjectConfig};
use human_panic::setup_panic;

use crate::{
    cli::{Args, Commands, ConfigCommands},
    context::GlobalContext,
};

mod cli;
mod context;
mod subcommands;
mod telemetry;
mod terminal;
mod utils;

fn print_help() -> Result<()> {
    let mut cmd = Args::command();
    cmd.print_help()?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    telemetry::init(args.debug)?;

    setup_panic!();

    #[cfg(debug_assertions)]
    color_eyre::install()?;

    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.debug {
        std::env::set_var(global_utils::DEBUG_ENV, args.debug.to_string());
    }

    let Some(command) = args.command else {
        return print_help();
    };

    let first_run = Config::is_first_run()?;

    if first_run && !command.needs_api() {
        match command {
            Commands::Types => subcommands::records::types(),
            _ => println!("Not logged in."),
        }

        return Ok(());
    }

    let config = if first_run {
        println!("Please configure the CLI before continue");
        println!();

        subcommands::config::reset(None).await?
    } else {
        Config::read().await?
    };

    let project = ProjectConfig::read().await;
    global_utils::print_dbg!(&project);

    let ctx = GlobalContext::new(config, project, args.yes)?;

    tracing::debug!(command = %command, base_url = ctx.api.base_url(), "starting");

    match command {
        Commands::Login { url, username } => subcommands::session::login(ctx, url, username).await?,
        Commands::Logout => subcommands::session::logout(ctx).await?,
        Commands::Search {
            topic,
            query,
            equipment_type,
            json,
        } => subcommands::records::search(ctx, topic, query, equipment_type, json).await?,
        Commands::Types => subcommands::records::types(),
        Commands::Open { topic, id } => subcommands::records::open(ctx, topic, id).await?,
        Commands::Delete { topic, id } => subcommands::records::delete(ctx, topic, id).await?,
        Commands::Assign {
            equipment_id,
            query,
        } => subcommands::records::assign(ctx, equipment_id, query).await?,
        Commands::Browse { topic } => subcommands::records::browse(ctx, topic).await?,
        Commands::Config { subcommands } => match subcommands {
            ConfigCommands::Reset => {
                subcommands::config::reset(Some(ctx.config)).await?;
            }
            ConfigCommands::Show => subcommands::config::show(&ctx.config)?,
        },
    }

    Ok(())
}
