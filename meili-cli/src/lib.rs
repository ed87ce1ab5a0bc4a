//! # Meili CLI
//!
//! Command-line front end for the search client.
//!
//! This crate provides the argument definitions, configuration and command
//! execution behind the `meili` binary.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::Cli;
pub use config::Dependencies;

use meili_client::ClientError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid command input.
    #[error("Invalid input: {0}")]
    InputError(String),

    /// Client error.
    #[error("Client error: {0}")]
    ClientError(#[from] ClientError),

    /// JSON error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an input error.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::InputError(msg.into())
    }
}
