//! Error types for the IR crate.

use crate::qubit::LogicalQubit;
use thiserror::Error;

/// Errors that can occur when building circuits and gates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate references a qubit outside the circuit's qubit space.
    #[error("Qubit {qubit} is not in the circuit's qubit space{}", format_gate_context(.gate_label))]
    QubitNotInSpace {
        /// The out-of-space qubit.
        qubit: LogicalQubit,
        /// Optional gate label for context.
        gate_label: Option<String>,
    },

    /// Gate operand set with a cardinality other than 1 or 2.
    #[error("A gate must act on 1 or 2 qubits, got {got}{}", format_gate_context(.gate_label))]
    OperandCount {
        /// Number of operands supplied.
        got: usize,
        /// Optional gate label for context.
        gate_label: Option<String>,
    },

    /// Two-qubit gate with both operands identical.
    #[error("Duplicate operand {qubit} in gate{}", format_gate_context(.gate_label))]
    DuplicateOperand {
        /// The repeated qubit.
        qubit: LogicalQubit,
        /// Optional gate label for context.
        gate_label: Option<String>,
    },

    /// Duplicate name when declaring a named qubit space.
    #[error("Duplicate qubit name '{0}' in qubit space")]
    DuplicateQubitName(String),

    /// An entry in a batch gate addition was invalid. The batch is
    /// applied atomically, so the circuit is left unchanged.
    #[error("Invalid gate at position {index} in batch: {source}")]
    InvalidGateInBatch {
        /// Position of the first invalid entry.
        index: usize,
        /// The underlying validity error.
        #[source]
        source: Box<IrError>,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_label: &Option<String>) -> String {
    match gate_label {
        Some(label) => format!(" (gate: {label})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
