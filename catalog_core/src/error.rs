use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for loading a record store.
///
/// Loading is the only fallible step of the catalog; joining and filtering
/// records never fail.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed {collection} records")]
    Parse {
        /// Which collection failed, e.g. "users".
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed records in {}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
