//! CLI module - argument definitions for the converter and lister binaries

mod args;

pub use args::{Cli, ListArgs};
