//! Support modules around the engine.
//!
//! - **Configuration**: [`config`], [`data_storage`]
//! - **Results**: [`analysis`] bundles engine output with its context
//! - **Presentation**: [`messages`], [`formatter`], [`view`]
//! - **Output**: [`export`]
//! - **Diagnostics**: [`logging`]

pub mod analysis;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod view;
