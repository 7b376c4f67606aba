use thiserror::Error;

use crate::graph::VertexId;

/** errors raised by the colony and its collaborators */
#[derive(Debug, Error)]
pub enum AcoError {
    /// no vertex to start a clique from
    #[error("the graph has no vertices")]
    EmptyGraph,

    /// neighbor lookup on a vertex that is not in the graph
    #[error("unknown vertex {0}")]
    UnknownVertex(VertexId),

    /// vertex name that is not in the graph
    #[error("unknown vertex '{0}'")]
    UnknownVertexName(String),

    /// weighted choice invoked without any option
    #[error("weighted choice over an empty candidate set")]
    EmptyCandidateSet,

    /// weighted choice invoked with a different number of items and factors
    #[error("{items} items but {factors} factors")]
    LengthMismatch {
        /// number of items
        items: usize,
        /// number of factors
        factors: usize,
    },

    /// parameters outside of their admissible bounds
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// malformed edge line in an instance file
    #[error("line {line}: {reason}")]
    Parse {
        /// line number (starting at 1)
        line: usize,
        /// what went wrong
        reason: String,
    },

    /// instance or report file could not be read or written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// performance report could not be serialized
    #[error("serde error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// result type used across the crate
pub type Result<T> = std::result::Result<T, AcoError>;
