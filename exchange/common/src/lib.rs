mod config;
mod env;
mod log;

pub use config::*;
pub use env::*;
pub use log::*;
