use anyhow::Result;
use clap::Args;
use geodraw_core::config::Config;
use geodraw_tools::{AgentManifest, ToolRegistry};

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// print the tool documentation as markdown instead of the JSON manifest
	#[arg(long, short)]
	markdown: bool,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	println!("{}", render(arguments, config)?);
	Ok(())
}

fn render(arguments: &Subcommand, config: &Config) -> Result<String> {
	let registry = ToolRegistry::from_config(config);
	if arguments.markdown {
		return Ok(registry.get_docs());
	}
	let manifest = AgentManifest::new(&registry, &config.agent);
	Ok(serde_json::to_string_pretty(&manifest)?)
}
