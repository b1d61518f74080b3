//! Tracing-based observability for the engine.
//!
//! The engine instruments itself with `tracing` spans and events: a debug
//! span per handled event and per puzzle build, debug events for selection
//! changes and pruning decisions, trace events for per-cell answer mutations.
//! This module wires those into a `tracing-subscriber` pipeline writing to
//! stderr.
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` option in [`crate::Config`]
//! (default `"info"`); the value is an `EnvFilter` directive string, so
//! per-target levels like `"crosskey=debug"` work too.
//!
//! # Usage
//!
//! Hosts that already install their own global subscriber can skip this
//! entirely; initialization is optional and idempotent.
//!
//! ```
//! use crosskey::observability::init_tracing;
//! use crosskey::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("engine loaded");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
