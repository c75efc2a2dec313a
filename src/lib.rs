//! Template processor hydrates a text template once per row of a CSV data
//! file, writing one output file per row with a configurable file name.

/// Command-line interface module for the template processor
pub mod cli;

/// Run configuration resolved and validated from the command line
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the template processor
pub mod error;

/// Output file naming and path safety checks
pub mod filename;

/// Template hydration
pub mod hydrator;

/// File-or-literal option loading
pub mod loader;

/// Logger setup
pub mod logger;

/// Placeholder patterns and regex text matchers
pub mod matcher;

/// Field value rewriting rules
pub mod modifier;

/// Row-by-row generation driver
pub mod processor;

/// Mapping of data rows onto template variables
pub mod record;
