//! Agent-callable tools over the measurement library.
//!
//! Every tool declares a name, a description and a JSON-Schema of its parameters.
//! Arguments are validated with the same geometry contracts as the interactive path,
//! and every outcome, including failures, is returned as a [`ToolResponse`] payload.

mod args;
mod manifest;
mod registry;
mod response;
mod schema;
mod traits;
pub mod tools;

pub use args::ToolArgs;
pub use manifest::AgentManifest;
pub use registry::ToolRegistry;
pub use response::ToolResponse;
pub use traits::ToolTrait;
