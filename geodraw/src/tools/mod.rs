pub mod call;
pub mod list;
pub mod replay;
