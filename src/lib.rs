//! # pwlab - Password and Pattern Lab
//!
//! A command-line utility and library for two small combinatorial problems:
//!
//! - **Password space**: the exact size of the `[A-Z][3 distinct digits][a-z]`
//!   space (486,720), uniform sampling of single passwords, and batches of
//!   distinct passwords.
//! - **Binary patterns**: counting and enumerating binary strings of length
//!   `n` with no two consecutive `1`s.
//!
//! The computations live in the pure [`engine`] module. [`libs`] carries
//! configuration, messages, export and views; [`commands`] wires them into
//! the CLI and the interactive menu.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pwlab::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::run()
//! }
//! ```

pub mod commands;
pub mod engine;
pub mod libs;
