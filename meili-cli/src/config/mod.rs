//! Configuration and client wiring for the CLI.

mod dependencies;

pub use dependencies::Dependencies;
