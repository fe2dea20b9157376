//! Logical and physical qubit identifiers, and the qubit space.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// Identifier for a logical qubit in a circuit's own qubit space.
///
/// Circuits address qubits either by a contiguous index or by a name
/// drawn from a fixed, caller-supplied set. Both variants are opaque to
/// the hardware: a logical qubit means nothing to a chip until a mapping
/// assigns it a physical qubit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogicalQubit {
    /// Indexed qubit in `[0, num_qubits)`.
    Index(u32),
    /// Named qubit from a fixed name set.
    Named(String),
}

impl fmt::Display for LogicalQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalQubit::Index(i) => write!(f, "q{i}"),
            LogicalQubit::Named(name) => write!(f, "{name}"),
        }
    }
}

impl From<u32> for LogicalQubit {
    fn from(index: u32) -> Self {
        LogicalQubit::Index(index)
    }
}

impl From<&str> for LogicalQubit {
    fn from(name: &str) -> Self {
        LogicalQubit::Named(name.to_string())
    }
}

impl From<String> for LogicalQubit {
    fn from(name: String) -> Self {
        LogicalQubit::Named(name)
    }
}

/// Identifier for a physical qubit: a node of the chip's connectivity
/// graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhysicalQubit(pub u32);

impl fmt::Display for PhysicalQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl From<u32> for PhysicalQubit {
    fn from(id: u32) -> Self {
        PhysicalQubit(id)
    }
}

/// The fixed, finite logical-qubit space a circuit or mapping is declared
/// over.
///
/// A circuit and a mapping built for the same search must share the same
/// space; identifiers outside it are rejected at the boundary. The space
/// is never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QubitSpace {
    /// Qubits addressed by index in `[0, n)`.
    Indexed(u32),
    /// Qubits addressed by name, in declaration order.
    Named(Vec<String>),
}

impl QubitSpace {
    /// The indexed space `[0, num_qubits)`.
    pub fn indexed(num_qubits: u32) -> Self {
        QubitSpace::Indexed(num_qubits)
    }

    /// A named space over the given names, in order.
    ///
    /// Fails if any name repeats.
    pub fn named(names: impl IntoIterator<Item = impl Into<String>>) -> IrResult<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = FxHashSet::default();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(IrError::DuplicateQubitName(name.clone()));
            }
        }
        Ok(QubitSpace::Named(names))
    }

    /// Number of logical qubits in the space.
    pub fn len(&self) -> usize {
        match self {
            QubitSpace::Indexed(n) => *n as usize,
            QubitSpace::Named(names) => names.len(),
        }
    }

    /// Check if the space has no qubits.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a logical qubit belongs to this space.
    ///
    /// Note: membership in a named space is a linear scan over the name
    /// list. Spaces are small; switch to a `FxHashSet` if that changes.
    pub fn contains(&self, qubit: &LogicalQubit) -> bool {
        match (self, qubit) {
            (QubitSpace::Indexed(n), LogicalQubit::Index(i)) => i < n,
            (QubitSpace::Named(names), LogicalQubit::Named(name)) => {
                names.iter().any(|n| n == name)
            }
            _ => false,
        }
    }

    /// Iterate over the qubits of the space in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = LogicalQubit> + '_ {
        let (indexed, named) = match self {
            QubitSpace::Indexed(n) => (Some(0..*n), None),
            QubitSpace::Named(names) => (None, Some(names.iter())),
        };
        indexed
            .into_iter()
            .flatten()
            .map(LogicalQubit::Index)
            .chain(
                named
                    .into_iter()
                    .flatten()
                    .map(|name| LogicalQubit::Named(name.clone())),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_qubit_display() {
        assert_eq!(format!("{}", LogicalQubit::Index(0)), "q0");
        assert_eq!(format!("{}", LogicalQubit::from("alice")), "alice");
    }

    #[test]
    fn test_physical_qubit_display() {
        assert_eq!(format!("{}", PhysicalQubit(3)), "p3");
    }

    #[test]
    fn test_indexed_space_membership() {
        let space = QubitSpace::indexed(3);
        assert_eq!(space.len(), 3);
        assert!(space.contains(&LogicalQubit::Index(0)));
        assert!(space.contains(&LogicalQubit::Index(2)));
        assert!(!space.contains(&LogicalQubit::Index(3)));
        assert!(!space.contains(&LogicalQubit::from("a")));
    }

    #[test]
    fn test_named_space_membership() {
        let space = QubitSpace::named(["a", "b", "c"]).unwrap();
        assert_eq!(space.len(), 3);
        assert!(space.contains(&LogicalQubit::from("b")));
        assert!(!space.contains(&LogicalQubit::from("d")));
        assert!(!space.contains(&LogicalQubit::Index(0)));
    }

    #[test]
    fn test_named_space_rejects_duplicates() {
        let result = QubitSpace::named(["a", "b", "a"]);
        assert!(matches!(result, Err(IrError::DuplicateQubitName(name)) if name == "a"));
    }

    #[test]
    fn test_space_iteration_order() {
        let indexed: Vec<_> = QubitSpace::indexed(3).iter().collect();
        assert_eq!(
            indexed,
            vec![
                LogicalQubit::Index(0),
                LogicalQubit::Index(1),
                LogicalQubit::Index(2)
            ]
        );

        let named: Vec<_> = QubitSpace::named(["x", "y"]).unwrap().iter().collect();
        assert_eq!(
            named,
            vec![LogicalQubit::from("x"), LogicalQubit::from("y")]
        );
    }
}
