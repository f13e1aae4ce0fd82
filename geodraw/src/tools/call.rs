use anyhow::{Context, Result};
use clap::Args;
use geodraw_core::config::Config;
use geodraw_tools::{ToolRegistry, ToolResponse};
use serde_json::Value;
use std::io::Read;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// name of the tool, e.g. calculatePolygonArea
	#[arg(required = true)]
	tool: String,

	/// tool arguments as JSON text, or "-" to read them from stdin
	#[arg(default_value = "{}")]
	args: String,

	/// pretty-print the payload
	#[arg(long, short)]
	pretty: bool,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let raw_args = if arguments.args == "-" {
		let mut text = String::new();
		std::io::stdin()
			.read_to_string(&mut text)
			.context("failed to read tool arguments from stdin")?;
		parse_args(text)
	} else {
		parse_args(arguments.args.clone())
	};

	let response = call(&arguments.tool, raw_args, config).await;
	let json = response.to_json();
	if arguments.pretty {
		println!("{}", serde_json::to_string_pretty(&json)?);
	} else {
		println!("{json}");
	}
	Ok(())
}

/// Text that is not JSON is handed to the tool as a plain string, which it then rejects.
fn parse_args(text: String) -> Value {
	serde_json::from_str(&text).unwrap_or(Value::String(text))
}

async fn call(tool: &str, raw_args: Value, config: &Config) -> ToolResponse {
	log::debug!("calling {tool}");
	ToolRegistry::from_config(config).call(tool, raw_args).await
}
