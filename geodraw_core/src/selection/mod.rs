mod event;
mod state;
mod tracker;

pub use event::*;
pub use state::*;
pub use tracker::*;
