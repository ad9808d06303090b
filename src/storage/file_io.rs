//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. Documents
//! are encoded as JSON or YAML depending on the configured snapshot format.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::config::SnapshotFormat;
use crate::error::BankError;

/// Read a document, returning `None` if the file doesn't exist
///
/// A file that exists but can't be decoded is reported as
/// [`BankError::CorruptSnapshot`].
pub fn read_document<T, P>(path: P, format: SnapshotFormat) -> Result<Option<T>, BankError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| BankError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    let decoded = match format {
        SnapshotFormat::Json => serde_json::from_reader(reader).map_err(|e| e.to_string()),
        SnapshotFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| e.to_string()),
    };

    decoded
        .map(Some)
        .map_err(|reason| BankError::CorruptSnapshot {
            path: path.display().to_string(),
            reason,
        })
}

/// Write a document atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_document_atomic<T, P>(path: P, format: SnapshotFormat, data: &T) -> Result<(), BankError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BankError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension(format!("{}.tmp", format.extension()));

    let file = File::create(&temp_path)
        .map_err(|e| BankError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let encoded = match format {
        SnapshotFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, data).map_err(|e| e.to_string())
        }
        SnapshotFormat::Yaml => serde_yaml::to_writer(&mut writer, data).map_err(|e| e.to_string()),
    };
    encoded.map_err(|e| BankError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BankError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BankError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BankError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
