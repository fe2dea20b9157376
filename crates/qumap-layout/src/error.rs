//! Error types for the layout crate.

use qumap_ir::{IrError, LogicalQubit};
use thiserror::Error;

/// Errors that can occur in mapping and feasibility operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LayoutError {
    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),

    /// Connectivity input could not be converted to an undirected graph.
    #[error(
        "Invalid chip connectivity: {reason}. Accepted forms are: \
         an edge list of physical-qubit pairs, e.g. [(1, 2), (2, 3)]; \
         an adjacency map from each qubit to the list of its neighbours; \
         or a square boolean adjacency matrix"
    )]
    InvalidConnectivity {
        /// What was wrong with the supplied representation.
        reason: String,
    },

    /// Named mapping constructed with the wrong number of names.
    #[error("Expected {expected} qubit names, got {got}")]
    NameCountMismatch {
        /// The declared qubit count.
        expected: usize,
        /// The number of names supplied.
        got: usize,
    },

    /// Logical qubit not declared in the mapping's qubit space.
    #[error("Logical qubit {0} is not declared in this mapping")]
    UnknownLogicalQubit(LogicalQubit),

    /// Feasibility was queried for an operand with no physical
    /// assignment. The predicate requires every qubit a slice touches to
    /// be assigned before it is called.
    #[error("Logical qubit {qubit} in gate '{gate}' has no physical assignment")]
    UnassignedOperand {
        /// The unassigned operand.
        qubit: LogicalQubit,
        /// Label of the gate that referenced it.
        gate: String,
    },
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
