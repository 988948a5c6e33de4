//! Command line argument parsing for the `vcfc` binary.

mod error;
mod parser;

pub use error::ParserError;
pub use parser::{Cli, Commands};
