use std::io;

use thiserror::Error;

use crate::input::InputSource;

#[derive(Debug, Error)]
pub enum WordFreqError {
    #[error("cannot open {origin}")]
    Open {
        origin: InputSource,
        #[source]
        source: io::Error,
    },
    #[error("error while reading {origin}")]
    Read {
        origin: InputSource,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report")]
    Write(#[from] io::Error),
}
