//! Helper functions shared by the parser, exporter and commands

mod date;
mod path;

pub use date::*;
pub use path::*;
