use std::{convert::Infallible, path::PathBuf};

use thiserror::Error;

use crate::reader::FileFormat;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read {format} event")]
    Read {
        format: FileFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("Failed to determine format of {0:?}")]
    UnknownFormat(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to draw chart")]
    Plot(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn read<E>(format: FileFormat) -> impl FnOnce(E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        move |err| Self::Read {
            format,
            source: Box::new(err),
        }
    }
}

impl From<Infallible> for Error {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}
