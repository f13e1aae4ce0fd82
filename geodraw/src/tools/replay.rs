use anyhow::{Context, Result};
use clap::Args;
use geodraw_core::{config::Config, session::{MapSession, read_commands}};
use std::{
	fs::File,
	io::{BufRead, BufReader, Write},
	path::PathBuf,
};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// newline-delimited JSON file with one session command per line, or "-" for stdin
	#[arg(required = true)]
	file: PathBuf,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let stdout = std::io::stdout();
	let mut output = stdout.lock();
	if arguments.file.as_os_str() == "-" {
		replay(std::io::stdin().lock(), config, &mut output)
	} else {
		let file = File::open(&arguments.file).with_context(|| format!("failed to open session file {:?}", arguments.file))?;
		replay(BufReader::new(file), config, &mut output)
	}
}

/// Runs every command through one session and writes a JSON report line per command.
///
/// Stops at the first line that is not a valid command.
fn replay(reader: impl BufRead, config: &Config, output: &mut impl Write) -> Result<()> {
	let mut session = MapSession::new(config);
	let mut count = 0usize;
	for command in read_commands(reader) {
		for report in session.handle(command?) {
			writeln!(output, "{}", serde_json::to_string(&report)?)?;
			count += 1;
		}
	}
	log::info!("replayed {count} commands");
	Ok(())
}
