//! Configuration module for CardBank
//!
//! This module provides configuration management including:
//! - Base/data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BankPaths;
pub use settings::{Settings, SnapshotFormat};
