use core::fmt;

use crate::graph::NodeId;

/// Result alias for `girvan_newman`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by graph construction, input parsing and the detector.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// An edge joins a node to itself.
    SelfLoop {
        /// The offending node.
        node: NodeId,
    },

    /// The same unordered pair was supplied twice.
    DuplicateEdge {
        /// Smaller endpoint.
        u: NodeId,
        /// Larger endpoint.
        v: NodeId,
    },

    /// Removal was requested for an edge the graph does not hold.
    MissingEdge {
        /// Smaller endpoint.
        u: NodeId,
        /// Larger endpoint.
        v: NodeId,
    },

    /// Property vectors are in use but this edge endpoint has none.
    MissingProperties {
        /// Node without a property record.
        node: NodeId,
    },

    /// Property vectors of unequal length (usize).
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Edge weight is not a positive finite number.
    InvalidWeight {
        /// First endpoint.
        u: NodeId,
        /// Second endpoint.
        v: NodeId,
        /// Rejected weight.
        weight: f64,
    },

    /// A node appears in more than one partition group.
    DuplicateNode {
        /// The repeated node.
        node: NodeId,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Malformed input record.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Underlying reader failed.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::SelfLoop { node } => write!(f, "self-loop on node {node}"),
            Error::DuplicateEdge { u, v } => write!(f, "duplicate edge ({u}, {v})"),
            Error::MissingEdge { u, v } => write!(f, "edge ({u}, {v}) does not exist"),
            Error::MissingProperties { node } => {
                write!(f, "node {node} has no property vector")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidWeight { u, v, weight } => {
                write!(f, "edge ({u}, {v}) has invalid weight {weight}")
            }
            Error::DuplicateNode { node } => {
                write!(f, "node {node} appears in more than one group")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::Parse { line, message } => write!(f, "line {line}: {message}"),
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::MissingEdge { u: 1, v: 4 });
        assert_eq!(err.to_string(), "edge (1, 4) does not exist");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        assert_eq!(Error::from(io), Error::Io("truncated".to_string()));
    }
}
