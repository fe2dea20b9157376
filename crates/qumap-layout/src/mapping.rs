//! Partial logical-to-physical qubit assignments.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use qumap_ir::{LogicalQubit, PhysicalQubit, QubitSpace};

use crate::error::{LayoutError, LayoutResult};

/// A partial, mutable assignment of logical qubits to physical qubits.
///
/// Every logical qubit of the declared space is present from
/// construction, pre-populated as unassigned; the space never grows or
/// shrinks afterwards. The assigned count is maintained incrementally and
/// always equals a live recount of the assigned entries.
///
/// The mapping does not enforce that distinct logical qubits get distinct
/// physical qubits: injectivity is the exploration algorithm's contract,
/// and feasibility checking only ever looks the mapping up in the forward
/// direction. Search drivers exploring several candidates concurrently
/// must give each branch its own clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    space: QubitSpace,
    assignment: FxHashMap<LogicalQubit, Option<PhysicalQubit>>,
    assigned: usize,
}

impl Mapping {
    /// An empty mapping over the indexed space `[0, num_qubits)`.
    pub fn new(num_qubits: u32) -> Self {
        Self::from_space(QubitSpace::indexed(num_qubits))
    }

    /// An empty mapping over a named qubit space.
    ///
    /// Fails if the name count differs from `num_qubits`, or if any name
    /// repeats.
    pub fn with_names(
        num_qubits: usize,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> LayoutResult<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != num_qubits {
            return Err(LayoutError::NameCountMismatch {
                expected: num_qubits,
                got: names.len(),
            });
        }
        Ok(Self::from_space(QubitSpace::named(names)?))
    }

    /// An empty mapping over an existing qubit space, typically the one
    /// a circuit was declared with.
    pub fn from_space(space: QubitSpace) -> Self {
        let assignment = space.iter().map(|qubit| (qubit, None)).collect();
        Self {
            space,
            assignment,
            assigned: 0,
        }
    }

    /// Apply a bulk starting assignment.
    ///
    /// Every pair overwrites whatever was there before; the assigned
    /// count is recomputed by a full rescan afterwards. Pairs are
    /// validated against the qubit space before any is applied, so a
    /// failed call leaves the mapping unchanged.
    pub fn starting_mapping(
        &mut self,
        pairs: impl IntoIterator<Item = (LogicalQubit, PhysicalQubit)>,
    ) -> LayoutResult<()> {
        let pairs: Vec<_> = pairs.into_iter().collect();
        for (logical, _) in &pairs {
            if !self.assignment.contains_key(logical) {
                return Err(LayoutError::UnknownLogicalQubit(logical.clone()));
            }
        }
        for (logical, physical) in pairs {
            self.assignment.insert(logical, Some(physical));
        }
        self.assigned = self.assignment.values().filter(|slot| slot.is_some()).count();
        Ok(())
    }

    /// Reassign a single logical qubit, or clear it with `None`.
    ///
    /// The assigned count is adjusted incrementally. Fails if the qubit
    /// is not declared in the mapping's space.
    pub fn update_mapping(
        &mut self,
        logical: &LogicalQubit,
        assignment: Option<PhysicalQubit>,
    ) -> LayoutResult<()> {
        let slot = self
            .assignment
            .get_mut(logical)
            .ok_or_else(|| LayoutError::UnknownLogicalQubit(logical.clone()))?;
        match (slot.is_some(), assignment.is_some()) {
            (false, true) => self.assigned += 1,
            (true, false) => self.assigned -= 1,
            _ => {}
        }
        *slot = assignment;
        Ok(())
    }

    /// The physical qubit assigned to a logical qubit, or `None` when it
    /// is unassigned or undeclared.
    pub fn physical(&self, logical: &LogicalQubit) -> Option<PhysicalQubit> {
        self.assignment.get(logical).copied().flatten()
    }

    /// Number of logical qubits currently assigned (not the size of the
    /// space).
    pub fn size(&self) -> usize {
        self.assigned
    }

    /// Check if every logical qubit is assigned.
    pub fn is_total(&self) -> bool {
        self.assigned == self.space.len()
    }

    /// Size of the declared logical-qubit space.
    pub fn num_qubits(&self) -> usize {
        self.space.len()
    }

    /// The qubit space this mapping was declared over.
    pub fn space(&self) -> &QubitSpace {
        &self.space
    }

    /// Iterate over the assigned (logical, physical) pairs in space
    /// declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalQubit, PhysicalQubit)> + '_ {
        self.space
            .iter()
            .filter_map(|qubit| self.physical(&qubit).map(|physical| (qubit, physical)))
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mapping {{")?;
        let mut first = true;
        for qubit in self.space.iter() {
            if !first {
                write!(f, ",")?;
            }
            first = false;
            match self.physical(&qubit) {
                Some(physical) => write!(f, " {qubit} -> {physical}")?,
                None => write!(f, " {qubit} -> *")?,
            }
        }
        write!(f, " }}")
    }
}
