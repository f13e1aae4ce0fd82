//! Draw-state synchronization for map drawing sessions.
//!
//! - [`selection`]: reduces draw toolkit events to the single active feature,
//! - [`analysis`]: legality rules and the dispatcher producing presentation records,
//! - [`viewport`]: fit-to-bounds requests for the map renderer,
//! - [`config`]: YAML configuration,
//! - [`session`]: the ordered command queue tying it all together.

pub mod analysis;
pub mod config;
mod error;
pub mod selection;
pub mod session;
pub mod viewport;

pub use error::*;
