//! # tasklist - server-rendered task list
//!
//! A web server that keeps tasks in SQLite and answers every request with an
//! HTML fragment, so an htmx page can update in place.
//!
//! ## Layout
//!
//! - [`db`]: connection pool and the persistence gateway for the `tasks` table
//! - [`web`]: router, shared state and one handler per endpoint
//! - [`libs`]: task record, renderer, errors, configuration, messages, logging
//! - [`commands`]: the `serve` and `init` CLI subcommands
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod web;
