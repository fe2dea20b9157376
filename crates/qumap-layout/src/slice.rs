//! Density-driven slicing of the two-qubit gate stream.

use tracing::debug;

use qumap_ir::{Circuit, Gate};

use crate::chip::Chip;

/// A contiguous, ordered window of a circuit's two-qubit gates.
///
/// Slices borrow from the circuit, so a circuit cannot be mutated while
/// slices over it are alive; the stream a search iterates is frozen for
/// the search's duration.
#[derive(Debug, Clone)]
pub struct Slice<'c> {
    gates: Vec<&'c Gate>,
}

impl<'c> Slice<'c> {
    /// Build a slice from borrowed gates.
    ///
    /// Feasibility only constrains two-qubit entries; single-qubit gates
    /// in a hand-built slice are ignored by the predicate.
    pub fn new(gates: Vec<&'c Gate>) -> Self {
        Self { gates }
    }

    /// Number of gates in the window.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the window is empty.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// The gates of the window, in stream order.
    pub fn gates(&self) -> &[&'c Gate] {
        &self.gates
    }

    /// Iterate over the gates of the window.
    pub fn iter(&self) -> impl Iterator<Item = &'c Gate> + '_ {
        self.gates.iter().copied()
    }
}

/// Partition a circuit's two-qubit gate stream into ordered, contiguous
/// windows sized by the chip's edge density.
///
/// Denser chips offer more candidate adjacencies, so more constraints can
/// be checked together before the search space explodes; sparse chips get
/// small windows so conflicts surface early. The window size is
/// `max(1, floor(density * n))` where `n` is the two-qubit gate count;
/// the floor of 1 guarantees progress even at density zero.
///
/// The returned slices are non-overlapping, every slice is non-empty, and
/// their concatenation in order reproduces the two-qubit stream exactly
/// (the final slice may be shorter than the rest).
pub fn slice<'c>(circuit: &'c Circuit, chip: &Chip) -> Vec<Slice<'c>> {
    let n = circuit.two_qubit_count();
    if n == 0 {
        return vec![];
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let slice_size = ((chip.density() * n as f64) as usize).max(1);
    debug!(
        two_qubit_gates = n,
        density = chip.density(),
        slice_size,
        "slicing circuit"
    );

    let gates: Vec<&Gate> = circuit.two_qubit_gates().collect();
    gates
        .chunks(slice_size)
        .map(|chunk| Slice::new(chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circuit_with_two_qubit_gates(n: u32) -> Circuit {
        let mut circuit = Circuit::new(4);
        for i in 0..n {
            let a = i % 4;
            let b = (i + 1) % 4;
            circuit
                .add_gate(Gate::two_qubit(format!("g{i}"), a, b).unwrap())
                .unwrap();
        }
        circuit
    }

    #[test]
    fn test_empty_circuit_yields_no_slices() {
        let circuit = Circuit::new(3);
        let chip = Chip::linear(3);
        assert!(slice(&circuit, &chip).is_empty());
    }

    #[test]
    fn test_sparse_chip_small_slices() {
        // 4 nodes, 1 edge: density 1/6; 12 gates -> slice size 2.
        let chip = Chip::from_adjacency([
            (0, vec![1]),
            (1, vec![0]),
            (2, vec![]),
            (3, vec![]),
        ])
        .unwrap();
        let circuit = circuit_with_two_qubit_gates(12);

        let slices = slice(&circuit, &chip);
        assert_eq!(slices.len(), 6);
        assert!(slices.iter().all(|s| s.len() == 2));
    }

    #[test]
    fn test_zero_density_still_progresses() {
        let chip = Chip::linear(1);
        assert_eq!(chip.density(), 0.0);
        let circuit = circuit_with_two_qubit_gates(3);

        let slices = slice(&circuit, &chip);
        assert_eq!(slices.len(), 3);
        assert!(slices.iter().all(|s| s.len() == 1));
    }

    #[test]
    fn test_full_chip_single_slice() {
        let chip = Chip::full(4);
        let circuit = circuit_with_two_qubit_gates(7);

        let slices = slice(&circuit, &chip);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].len(), 7);
    }

    #[test]
    fn test_concatenation_reproduces_stream() {
        let chip = Chip::linear(4);
        let circuit = circuit_with_two_qubit_gates(10);

        let slices = slice(&circuit, &chip);
        let concatenated: Vec<&Gate> = slices.iter().flat_map(Slice::iter).collect();
        let stream: Vec<&Gate> = circuit.two_qubit_gates().collect();
        assert_eq!(concatenated, stream);
        assert!(slices.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_ragged_final_slice() {
        // linear(4): density 3/6 = 0.5; 7 gates -> slice size 3: 3,3,1.
        let chip = Chip::linear(4);
        let circuit = circuit_with_two_qubit_gates(7);

        let sizes: Vec<_> = slice(&circuit, &chip).iter().map(Slice::len).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }
}
