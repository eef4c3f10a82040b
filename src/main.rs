use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;

use git_start::cli::{Cli, Commands};
use git_start::color::{self, ColorMode};
use git_start::{commands, logging};

fn main() -> ExitCode {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    logging::init(cli.debug);

    // Resolve color mode from CLI flag and environment variables
    let color_mode = ColorMode::resolve(cli.color);

    match run(cli, color_mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", color::error(color_mode, format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, color_mode: ColorMode) -> Result<()> {
    match (cli.command, cli.issue) {
        (Some(Commands::Pr), _) => commands::pr::cmd_pr(color_mode),
        (Some(Commands::Init { force }), _) => commands::init::cmd_init(force, color_mode),
        (Some(Commands::Completion { shell }), _) => commands::completion::cmd_completion(&shell),
        (None, Some(issue)) => commands::start::cmd_start(&issue, color_mode),
        // Only global flags were given
        (None, None) => {
            Cli::command().print_help()?;
            anyhow::bail!("an issue or a subcommand is required")
        }
    }
}
