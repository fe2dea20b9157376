//! Per-slice feasibility checking.

use tracing::trace;

use qumap_ir::{LogicalQubit, PhysicalQubit};

use crate::chip::Chip;
use crate::error::{LayoutError, LayoutResult};
use crate::mapping::Mapping;
use crate::slice::Slice;

/// Check whether a mapping satisfies every two-qubit gate in a slice.
///
/// A slice is feasible when each gate's operands map to physical qubits
/// joined by a coupling edge on the chip. The check is fail-fast: the
/// first non-adjacent pair decides the slice and later entries are not
/// evaluated. Reordering a slice's entries never changes the result,
/// only which entry trips the early exit.
///
/// Every logical qubit the slice touches must already be assigned;
/// querying an unassigned operand is a usage error, surfaced as
/// [`LayoutError::UnassignedOperand`]. Lookups are forward-only (logical
/// to physical), so the mapping need not be injective for the predicate
/// to be well defined.
///
/// Pure query: no state is touched, and the same inputs always produce
/// the same result.
pub fn is_feasible(mapping: &Mapping, slice: &Slice<'_>, chip: &Chip) -> LayoutResult<bool> {
    for gate in slice.iter() {
        // Single-qubit gates place no constraint on the mapping.
        let Some((q1, q2)) = gate.qubit_pair() else {
            continue;
        };
        let p1 = assigned(mapping, q1, gate.label())?;
        let p2 = assigned(mapping, q2, gate.label())?;
        if !chip.is_adjacent(p1, p2) {
            trace!(gate = gate.label(), %q1, %q2, %p1, %p2, "operands not adjacent");
            return Ok(false);
        }
    }
    Ok(true)
}

fn assigned(
    mapping: &Mapping,
    qubit: &LogicalQubit,
    gate: &str,
) -> LayoutResult<PhysicalQubit> {
    mapping
        .physical(qubit)
        .ok_or_else(|| LayoutError::UnassignedOperand {
            qubit: qubit.clone(),
            gate: gate.to_string(),
        })
}
