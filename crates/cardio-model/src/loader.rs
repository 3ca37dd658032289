//! Reads a serialized classifier from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::Model;

/// Value of the envelope's `format` field.
pub const FORMAT_TAG: &str = "cardio-classifier";

/// Highest envelope version this build reads.
pub const FORMAT_VERSION: u32 = 1;

/// Fatal startup failures. The server does not run without a model.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("model file '{}' was not found", path.display())]
    NotFound { path: PathBuf },

    #[error("model file '{}' is not a valid classifier file or is corrupted: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("failed to read model file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Deserialize)]
struct Envelope {
    format: String,
    version: u32,
    model: Model,
}

/// Loads the classifier at `path`.
pub fn load_classifier(path: impl AsRef<Path>) -> Result<Model, LoadError> {
    let path = path.as_ref();
    debug!("Attempting to load the model from {}", path.display());

    let bytes = fs::read(path).map_err(|source| {
        let err = match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
            _ => LoadError::Io { path: path.to_path_buf(), source },
        };
        error!("{}", err);
        err
    })?;

    let model = parse_classifier(&bytes).map_err(|reason| {
        let err = LoadError::Corrupt { path: path.to_path_buf(), reason };
        error!("{}", err);
        err
    })?;

    info!("Model loaded successfully ({}) from {}", model.kind(), path.display());
    Ok(model)
}

/// Decodes an envelope from bytes. The error is a human-readable reason.
pub fn parse_classifier(bytes: &[u8]) -> Result<Model, String> {
    let envelope: Envelope = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;

    if envelope.format != FORMAT_TAG {
        return Err(format!("unknown format tag {:?}", envelope.format));
    }
    if envelope.version == 0 || envelope.version > FORMAT_VERSION {
        return Err(format!("unsupported format version {}", envelope.version));
    }
    Ok(envelope.model)
}
