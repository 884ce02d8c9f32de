//! Command-line interface module.

mod args;
pub mod export;
pub mod init;
pub mod show;
pub mod validate;

pub use args::{Cli, Commands, ExportArgs, ValidateArgs};
