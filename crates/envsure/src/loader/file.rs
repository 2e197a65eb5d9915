//! Settings-file reading and parsing.
//!
//! Invariants:
//! - A missing file yields an empty mapping, never an error.
//! - Parse errors carry only a byte index, never raw line contents.
//! - Parsing never touches the process environment; `dotenvy`'s iterator API
//!   is used so values stay local to the call.

use std::io::{Cursor, ErrorKind};
use std::path::Path;

use crate::error::LoadError;
use crate::schema::RawEnv;

/// Text encoding used when decoding the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Strict UTF-8 (the default); invalid data fails the read.
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
}

/// Read and parse the settings file into a raw mapping.
pub(crate) async fn read_env_file(path: &Path, encoding: Encoding) -> Result<RawEnv, LoadError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "settings file not found, using empty mapping");
            return Ok(RawEnv::new());
        }
        Err(e) => return Err(LoadError::EnvFileIo { kind: e.kind() }),
    };

    let text = match encoding {
        Encoding::Utf8 => String::from_utf8(bytes).map_err(|_| LoadError::EnvFileIo {
            kind: ErrorKind::InvalidData,
        })?,
        Encoding::Utf8Lossy => String::from_utf8_lossy(&bytes).into_owned(),
    };

    let mut mapping = RawEnv::new();
    for item in dotenvy::from_read_iter(Cursor::new(text.into_bytes())) {
        match item {
            Ok((key, value)) => {
                mapping.insert(key, value);
            }
            Err(dotenvy::Error::LineParse(_, index)) => {
                return Err(LoadError::EnvFileParse { error_index: index });
            }
            Err(dotenvy::Error::Io(io_err)) => {
                return Err(LoadError::EnvFileIo {
                    kind: io_err.kind(),
                });
            }
            Err(_) => {
                return Err(LoadError::EnvFileIo {
                    kind: ErrorKind::InvalidData,
                });
            }
        }
    }

    tracing::debug!(path = %path.display(), keys = mapping.len(), "parsed settings file");
    Ok(mapping)
}
