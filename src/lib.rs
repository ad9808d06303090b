//! cardbank - command-line banking simulator
//!
//! A single user opens an account, issues payment cards of several kinds and
//! moves money on and between them. Every card kind carries its own tax
//! schedule for withdrawals, deposits and transfers. All accounts live in one
//! snapshot file that is read and rewritten as a whole.
//!
//! # Architecture
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Accounts, cards, card kinds and card numbers
//! - `storage`: Snapshot persistence behind the `SnapshotStore` trait
//! - `services`: Account, transfer and validation logic
//! - `display`: Text formatting for CLI output
//! - `cli`: clap command handlers
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use cardbank::config::{BankPaths, Settings};
//! use cardbank::storage::FileSnapshotStore;
//!
//! let paths = BankPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = FileSnapshotStore::open(&paths, settings.snapshot_format)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BankError, BankResult};
