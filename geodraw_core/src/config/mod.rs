mod agent;
mod analysis;
mod buffer;
mod main;
mod tools;
mod viewport;

pub use agent::AgentConfig;
pub use analysis::AnalysisConfig;
pub use buffer::BufferConfig;
pub use main::Config;
pub use tools::ToolsConfig;
pub use viewport::ViewportConfig;
