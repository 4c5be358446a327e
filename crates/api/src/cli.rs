//! Command-line interface of the `storefront-api` binary.

use clap::{Parser, Subcommand};

/// Demo computer storefront: public catalog plus admin pages.
///
/// Without a subcommand the HTTP server starts. Settings come from the
/// environment (and `.env`), see `ServerConfig::from_env`.
#[derive(Debug, Parser)]
#[command(name = "storefront-api", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create the products table and seed demo data if it is empty, then exit.
    InitDb,
}
