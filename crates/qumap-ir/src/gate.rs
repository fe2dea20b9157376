//! Gates and their operand sets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::qubit::LogicalQubit;

/// The operand set of a gate: one qubit, or an unordered pair of two
/// distinct qubits. Larger operand sets are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operands {
    /// A single-qubit operand.
    Single(LogicalQubit),
    /// A pair of distinct qubits.
    Pair(LogicalQubit, LogicalQubit),
}

impl Operands {
    /// A single-qubit operand set.
    pub fn single(qubit: impl Into<LogicalQubit>) -> Self {
        Operands::Single(qubit.into())
    }

    /// A two-qubit operand set.
    ///
    /// Fails if both operands are the same qubit: a gate cannot act on
    /// one logical qubit twice in a single operand set.
    pub fn pair(a: impl Into<LogicalQubit>, b: impl Into<LogicalQubit>) -> IrResult<Self> {
        let a = a.into();
        let b = b.into();
        if a == b {
            return Err(IrError::DuplicateOperand {
                qubit: a,
                gate_label: None,
            });
        }
        Ok(Operands::Pair(a, b))
    }

    /// Build an operand set from a slice, validating cardinality.
    pub fn from_slice(qubits: &[LogicalQubit]) -> IrResult<Self> {
        match qubits {
            [q] => Ok(Operands::Single(q.clone())),
            [a, b] => Operands::pair(a.clone(), b.clone()),
            _ => Err(IrError::OperandCount {
                got: qubits.len(),
                gate_label: None,
            }),
        }
    }

    /// Check if this is a two-qubit operand set.
    #[inline]
    pub fn is_pair(&self) -> bool {
        matches!(self, Operands::Pair(_, _))
    }

    /// Iterate over the operand qubits.
    pub fn qubits(&self) -> impl Iterator<Item = &LogicalQubit> {
        let (first, second) = match self {
            Operands::Single(q) => (q, None),
            Operands::Pair(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operands::Single(q) => write!(f, "{q}"),
            Operands::Pair(a, b) => write!(f, "{a},{b}"),
        }
    }
}

/// A gate in the circuit's stream: an opaque label applied to an operand
/// set. Labels pass through the mapping core untouched; only the operand
/// cardinality matters to feasibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gate {
    label: String,
    operands: Operands,
}

impl Gate {
    /// Create a gate from a label and an operand list, validating that
    /// the list holds one or two distinct qubits.
    pub fn new(
        label: impl Into<String>,
        qubits: impl IntoIterator<Item = LogicalQubit>,
    ) -> IrResult<Self> {
        let label = label.into();
        let qubits: Vec<LogicalQubit> = qubits.into_iter().collect();
        let operands = Operands::from_slice(&qubits).map_err(|err| match err {
            IrError::DuplicateOperand { qubit, .. } => IrError::DuplicateOperand {
                qubit,
                gate_label: Some(label.clone()),
            },
            IrError::OperandCount { got, .. } => IrError::OperandCount {
                got,
                gate_label: Some(label.clone()),
            },
            other => other,
        })?;
        Ok(Self { label, operands })
    }

    /// Create a single-qubit gate.
    pub fn single(label: impl Into<String>, qubit: impl Into<LogicalQubit>) -> Self {
        Self {
            label: label.into(),
            operands: Operands::Single(qubit.into()),
        }
    }

    /// Create a two-qubit gate.
    ///
    /// Fails if both operands are the same qubit.
    pub fn two_qubit(
        label: impl Into<String>,
        a: impl Into<LogicalQubit>,
        b: impl Into<LogicalQubit>,
    ) -> IrResult<Self> {
        let label = label.into();
        let a = a.into();
        let b = b.into();
        if a == b {
            return Err(IrError::DuplicateOperand {
                qubit: a,
                gate_label: Some(label),
            });
        }
        Ok(Self {
            label,
            operands: Operands::Pair(a, b),
        })
    }

    /// The gate label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The operand set.
    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    /// Check if this gate acts on two qubits.
    #[inline]
    pub fn is_two_qubit(&self) -> bool {
        self.operands.is_pair()
    }

    /// The operand pair, if this is a two-qubit gate.
    pub fn qubit_pair(&self) -> Option<(&LogicalQubit, &LogicalQubit)> {
        match &self.operands {
            Operands::Pair(a, b) => Some((a, b)),
            Operands::Single(_) => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.operands)
    }
}
