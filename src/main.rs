use std::process::ExitCode;

use clap::Parser;

use crate::cmd_export::print_export;
use crate::cmd_find::print_find;
use crate::cmd_get::{print_get, print_named};
use crate::cmd_grid::print_grid;
use crate::commands::{Cli, Commands};

mod cmd_export;
mod cmd_find;
mod cmd_get;
mod cmd_grid;
mod commands;
mod common;

fn main() -> ExitCode {
	let cli = Cli::parse();

	if cli.no_color {
		colored::control::set_override(false);
	}

	if cli.debug {
		eprintln!("{cli:?}");
	}

	let result = match &cli.command {
		Some(Commands::Grid) | None => print_grid(cli.debug),
		Some(Commands::Get(args)) => print_get(args, cli.debug),
		Some(Commands::Named(args)) => print_named(args, cli.debug),
		Some(Commands::Find(args)) => print_find(args, cli.debug),
		Some(Commands::Export(args)) => print_export(args, cli.debug),
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}
