//! Library side of the `lunch-menu` binary.
//!
//! `app::run` ties the workspace crates together; the binary only sets up
//! logging, parses arguments and maps errors to exit codes.

pub mod app;
pub mod args;
pub mod error;
pub mod export;
pub mod render;

pub use app::run;
pub use args::Cli;
pub use error::CliError;
