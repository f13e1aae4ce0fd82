mod dispatcher;
mod operation;
mod result;

pub use dispatcher::*;
pub use operation::*;
pub use result::*;
