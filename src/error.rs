//! Error type shared by the fallible parts of the crate: case loading,
//! position parsing and region construction.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Position text not of the form `[t][i][j]`
    #[error("invalid position '{0}', expected something like \"[0][10][13]\"")]
    InvalidPosition(String),

    /// Checked union-find access outside `0..len`
    #[error("index {index} out of range for union-find of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// An edge names a peer that is not a vertex of the model graph
    #[error("model graph vertex {vertex} has an edge to {peer}, which is not a model graph vertex")]
    UnknownPeer { vertex: String, peer: String },

    /// A node is stored at one grid slot but claims another position
    #[error("model graph node stored at {slot} reports position {reported}")]
    MisplacedNode { slot: String, reported: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse case JSON: {0}")]
    Json(#[from] serde_json::Error),
}
