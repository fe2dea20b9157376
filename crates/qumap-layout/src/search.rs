//! Mapping search driver skeleton.
//!
//! The core's contract to a search algorithm is exactly this: per slice,
//! in slice order, a mapping must be total and feasible to be accepted.
//! Everything about how candidate mappings are generated or repaired
//! (backtracking, restarts, heuristic repair, constraint solving) belongs
//! to the caller-supplied [`SearchStrategy`].

use tracing::{debug, info, instrument};

use qumap_ir::Circuit;

use crate::chip::Chip;
use crate::error::LayoutResult;
use crate::feasibility::is_feasible;
use crate::mapping::Mapping;
use crate::slice::{Slice, slice};

/// What a strategy did when asked to revise a rejected mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    /// The mapping was changed; the driver re-checks the current slice.
    Revised,
    /// The strategy gives up on the current slice.
    Abandon,
}

/// Outcome of a mapping search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every slice was accepted with a total, feasible mapping.
    Mapped,
    /// The strategy abandoned the search at the given slice.
    Abandoned {
        /// Index of the slice that could not be satisfied.
        slice_index: usize,
    },
}

/// A caller-supplied mapping revision policy.
///
/// `revise` is called whenever the current mapping is rejected for a
/// slice, either because it is not total or because the slice is
/// infeasible. The strategy mutates the
/// mapping in place and reports whether the driver should re-check the
/// slice or stop. Strategies exploring several candidates at once must
/// clone the mapping per branch; the chip and circuit are shared
/// read-only.
pub trait SearchStrategy {
    /// Name of this strategy, for logging.
    fn name(&self) -> &str;

    /// Revise a rejected mapping for `slice`.
    fn revise(
        &mut self,
        mapping: &mut Mapping,
        slice: &Slice<'_>,
        chip: &Chip,
    ) -> LayoutResult<Revision>;
}

/// Drive a mapping search over a circuit's slices, in order.
///
/// Each slice must be accepted (mapping total and slice feasible) before
/// the next is considered. A rejected slice hands the mapping to
/// the strategy; [`Revision::Revised`] re-checks the same slice,
/// [`Revision::Abandon`] ends the search with the offending slice index.
#[instrument(skip_all, fields(strategy = strategy.name()))]
pub fn run_search(
    circuit: &Circuit,
    chip: &Chip,
    mapping: &mut Mapping,
    strategy: &mut dyn SearchStrategy,
) -> LayoutResult<SearchOutcome> {
    let slices = slice(circuit, chip);
    info!(
        slices = slices.len(),
        qubits = circuit.num_qubits(),
        "starting mapping search"
    );

    for (index, window) in slices.iter().enumerate() {
        loop {
            // Totality is checked first so the predicate is never asked
            // about an unassigned operand.
            if mapping.is_total() && is_feasible(mapping, window, chip)? {
                debug!(slice = index, gates = window.len(), "slice accepted");
                break;
            }
            match strategy.revise(mapping, window, chip)? {
                Revision::Revised => {}
                Revision::Abandon => {
                    info!(slice = index, "search abandoned");
                    return Ok(SearchOutcome::Abandoned { slice_index: index });
                }
            }
        }
    }

    info!("mapping search complete");
    Ok(SearchOutcome::Mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qumap_ir::Gate;

    /// Strategy that must never be consulted.
    struct Untouchable;

    impl SearchStrategy for Untouchable {
        fn name(&self) -> &str {
            "untouchable"
        }

        fn revise(
            &mut self,
            _mapping: &mut Mapping,
            _slice: &Slice<'_>,
            _chip: &Chip,
        ) -> LayoutResult<Revision> {
            panic!("strategy consulted for an already-acceptable mapping");
        }
    }

    /// Strategy that gives up immediately.
    struct GiveUp;

    impl SearchStrategy for GiveUp {
        fn name(&self) -> &str {
            "give_up"
        }

        fn revise(
            &mut self,
            _mapping: &mut Mapping,
            _slice: &Slice<'_>,
            _chip: &Chip,
        ) -> LayoutResult<Revision> {
            Ok(Revision::Abandon)
        }
    }

    fn line_circuit() -> Circuit {
        let mut circuit = Circuit::new(3);
        circuit
            .add_gates(vec![
                Gate::two_qubit("cx", 0u32, 1u32).unwrap(),
                Gate::two_qubit("cx", 1u32, 2u32).unwrap(),
            ])
            .unwrap();
        circuit
    }

    #[test]
    fn test_acceptable_mapping_skips_strategy() {
        let chip = Chip::linear(3);
        let circuit = line_circuit();
        let mut mapping = Mapping::new(3);
        mapping
            .starting_mapping([
                (0u32.into(), 0u32.into()),
                (1u32.into(), 1u32.into()),
                (2u32.into(), 2u32.into()),
            ])
            .unwrap();

        let outcome = run_search(&circuit, &chip, &mut mapping, &mut Untouchable).unwrap();
        assert_eq!(outcome, SearchOutcome::Mapped);
    }

    #[test]
    fn test_non_total_mapping_is_rejected() {
        let chip = Chip::linear(3);
        let circuit = line_circuit();
        // One qubit left unassigned: not total, strategy consulted.
        let mut mapping = Mapping::new(3);
        mapping
            .starting_mapping([(0u32.into(), 0u32.into()), (1u32.into(), 1u32.into())])
            .unwrap();

        let outcome = run_search(&circuit, &chip, &mut mapping, &mut GiveUp).unwrap();
        assert_eq!(outcome, SearchOutcome::Abandoned { slice_index: 0 });
    }

    #[test]
    fn test_empty_circuit_maps_trivially() {
        let chip = Chip::linear(2);
        let circuit = Circuit::new(2);
        let mut mapping = Mapping::new(2);

        let outcome = run_search(&circuit, &chip, &mut mapping, &mut Untouchable).unwrap();
        assert_eq!(outcome, SearchOutcome::Mapped);
    }
}
