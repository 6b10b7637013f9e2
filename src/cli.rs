// src/cli.rs
//! CLI argument definitions using clap
//!
//! Commands:
//! - products-api serve (default when no subcommand is given)
//! - products-api create-schema
//! - products-api drop-schema
//! - products-api seed

use clap::{Parser, Subcommand};

/// Minimal CRUD HTTP API over a single products table
#[derive(Parser, Debug)]
#[command(name = "products-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve,

    /// Create the products table if it does not exist
    CreateSchema,

    /// Drop the products table
    DropSchema,

    /// Insert two demonstration products
    Seed,
}
