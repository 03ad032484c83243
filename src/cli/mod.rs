//! CLI module for marksheet
//!
//! Provides subcommands for running the app:
//! - `serve`: run the web server
//! - `validate`: load the marks table once and report what it contains

pub mod serve;
pub mod validate;

use clap::{Parser, Subcommand};

/// Marksheet - student and course marks lookup over a CSV table
#[derive(Parser)]
#[command(name = "marksheet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve,

    /// Load the marks table once and report record count or the load error
    Validate,
}
