use super::{AgentConfig, AnalysisConfig, BufferConfig, ToolsConfig, ViewportConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Defaults of the interactive analysis path
	#[serde(default)]
	pub analysis: AnalysisConfig,

	/// Buffer polygon construction
	#[serde(default)]
	pub buffer: BufferConfig,

	/// Unit defaults of the agent tools
	#[serde(default)]
	pub tools: ToolsConfig,

	/// Fit-to-bounds options
	#[serde(default)]
	pub viewport: ViewportConfig,

	/// Agent runtime settings
	#[serde(default)]
	pub agent: AgentConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_reader(reader)?;
		config.check()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_str(text)?;
		config.check()?;
		Ok(config)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to read config file {path:?}"))
	}

	/// Sanity checks of values serde cannot express.
	pub fn check(&self) -> Result<()> {
		self.analysis.check()?;
		self.buffer.check()?;
		self.agent.check()?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geodraw_geometry::Units;
	use pretty_assertions::assert_eq;
	use std::io::Write;

	#[test]
	fn parse_example_config() {
		let path = Path::new("../testdata/config.yml");
		let config = Config::from_path(path).unwrap();

		assert_eq!(
			config,
			Config {
				analysis: AnalysisConfig {
					buffer_radius: 500.0,
					buffer_units: Units::Meters,
					distance_units: Units::Kilometers,
					decimals: 3,
				},
				buffer: BufferConfig { steps: 32 },
				tools: ToolsConfig {
					distance_units: Units::Meters,
					buffer_units: Units::Meters,
				},
				viewport: ViewportConfig {
					padding: 40,
					max_zoom: 16,
				},
				agent: AgentConfig {
					system_message: "You are a careful surveyor.".to_string(),
					max_duration_seconds: 60,
				},
			}
		);
	}

	#[test]
	fn parse_empty_config() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
	}

	#[test]
	fn defaults() {
		let config = Config::default();
		assert_eq!(config.analysis.buffer_radius, 1.0);
		assert_eq!(config.analysis.buffer_units, Units::Kilometers);
		assert_eq!(config.tools.buffer_units, Units::Meters);
		assert_eq!(config.tools.distance_units, Units::Kilometers);
		assert_eq!(config.buffer.steps, 64);
		assert_eq!(config.viewport.padding, 100);
		assert_eq!(config.viewport.max_zoom, 18);
		assert_eq!(config.agent.max_duration_seconds, 30);
		assert!(config.agent.system_message.starts_with("You are a helpful geospatial AI assistant."));
	}

	#[test]
	fn partial_section_keeps_other_defaults() {
		let config = Config::from_string("analysis:\n  decimals: 4\n").unwrap();
		assert_eq!(config.analysis.decimals, 4);
		assert_eq!(config.analysis.buffer_radius, 1.0);
	}

	#[test]
	fn unknown_fields_are_rejected() {
		let error = Config::from_string("analysis:\n  radius: 3\n").unwrap_err();
		assert!(error.to_string().contains("unknown field `radius`"), "{error}");
		assert!(Config::from_string("server:\n  port: 80\n").is_err());
	}

	#[test]
	fn unknown_units_are_rejected() {
		let error = Config::from_string("tools:\n  buffer_units: miles\n").unwrap_err();
		assert!(error.to_string().contains("unknown variant `miles`"), "{error}");
	}

	#[test]
	fn invalid_values_are_rejected() {
		assert_eq!(
			Config::from_string("buffer:\n  steps: 2\n").unwrap_err().to_string(),
			"buffer.steps must be at least 3, found 2"
		);
		assert_eq!(
			Config::from_string("analysis:\n  buffer_radius: -1\n")
				.unwrap_err()
				.to_string(),
			"analysis.buffer_radius must be a positive number, found -1"
		);
		assert_eq!(
			Config::from_string("agent:\n  max_duration_seconds: 0\n")
				.unwrap_err()
				.to_string(),
			"agent.max_duration_seconds must be positive"
		);
	}

	#[test]
	fn from_reader_and_path_agree() {
		let yaml = "viewport:\n  padding: 12\n";
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(yaml.as_bytes()).unwrap();
		assert_eq!(
			Config::from_path(file.path()).unwrap(),
			Config::from_reader(yaml.as_bytes()).unwrap()
		);
	}

	#[test]
	fn missing_file() {
		let error = Config::from_path(Path::new("../testdata/does-not-exist.yml")).unwrap_err();
		assert!(error.to_string().starts_with("failed to open config file"));
	}
}
