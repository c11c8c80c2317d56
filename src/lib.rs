//! Event Summarizer
//!
//! Reads a pipe-delimited event log, groups records by process name and
//! event code, and writes one summary report file per process.
//!
//! This crate provides the core implementation for the
//! `event-summarizer` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install event-summarizer
//! event-summarizer --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod reader;
pub mod utils;
pub mod writer;
