mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use geodraw_core::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML configuration file; built-in defaults are used without it
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Print the agent manifest with all tool definitions
	Tools(tools::list::Subcommand),

	#[clap(alias = "run")]
	/// Run one analysis tool and print its payload
	Call(tools::call::Subcommand),

	/// Replay a recorded drawing session
	Replay(tools::replay::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn load_config(cli: &Cli) -> Result<Config> {
	match &cli.config {
		Some(path) => {
			log::debug!("reading config {path:?}");
			Config::from_path(path)
		}
		None => Ok(Config::default()),
	}
}

fn run(cli: Cli) -> Result<()> {
	let config = load_config(&cli)?;
	match &cli.command {
		Commands::Tools(arguments) => tools::list::run(arguments, &config),
		Commands::Call(arguments) => tools::call::run(arguments, &config),
		Commands::Replay(arguments) => tools::replay::run(arguments, &config),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	pub fn get_testdata(filename: &str) -> String {
		format!("{}/../testdata/{filename}", env!("CARGO_MANIFEST_DIR"))
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geodraw"]).unwrap_err().to_string();
		assert!(err.starts_with("Draw-state synchronization and geospatial analysis tools for map drawing sessions and AI agents."));
		assert!(err.contains("\nUsage: geodraw [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geodraw", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geodraw "));
	}

	#[test]
	fn call_subcommand() {
		let output = run_command(vec!["geodraw", "call"]).unwrap_err().to_string();
		assert!(output.starts_with("Run one analysis tool and print its payload"));
	}

	#[test]
	fn replay_subcommand() {
		let output = run_command(vec!["geodraw", "replay"]).unwrap_err().to_string();
		assert!(output.starts_with("Replay a recorded drawing session"));
	}

	#[test]
	fn config_is_global() {
		let config = get_testdata("config.yml");
		let msg = run_command(vec!["geodraw", "tools", "--config", &config]).unwrap();
		assert!(msg.contains("config.yml"));
	}

	#[test]
	fn missing_config_fails() {
		let err = run_command(vec!["geodraw", "--config", "/does/not/exist.yml", "tools"]).unwrap_err();
		assert!(format!("{err:#}").contains("failed to open config file"));
	}
}
