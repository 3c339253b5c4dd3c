pub mod add;
pub mod check;
mod command_result;
pub mod init;
pub mod resolve;
pub mod sort;
pub mod unused;

pub use command_result::*;
