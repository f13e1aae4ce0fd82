//! The map session: one linear queue of commands driving the tracker and the dispatcher.

mod command;
mod map_session;

pub use command::*;
pub use map_session::*;
