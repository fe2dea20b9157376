//! Circuit: an ordered gate stream with its two-qubit projection.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::QubitSpace;

/// An ordered sequence of gates over a fixed logical-qubit space.
///
/// Only the two-qubit gates constrain a mapping, so the circuit maintains
/// the ordered subsequence of two-qubit entries as an index list into the
/// gate stream. The projection is derived state: every mutation goes
/// through [`add_gate`](Self::add_gate), which keeps it in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// The logical-qubit space gates are validated against.
    space: QubitSpace,
    /// Gates in insertion order.
    gates: Vec<Gate>,
    /// Positions in `gates` of the two-qubit entries, in order.
    two_qubit: Vec<usize>,
}

impl Circuit {
    /// Create an empty circuit over the indexed space `[0, num_qubits)`.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            space: QubitSpace::indexed(num_qubits),
            gates: vec![],
            two_qubit: vec![],
        }
    }

    /// Create an empty circuit over a named qubit space.
    ///
    /// Fails if any name repeats.
    pub fn with_names(names: impl IntoIterator<Item = impl Into<String>>) -> IrResult<Self> {
        Ok(Self {
            space: QubitSpace::named(names)?,
            gates: vec![],
            two_qubit: vec![],
        })
    }

    /// Append a gate to the circuit.
    ///
    /// Fails if any operand lies outside the circuit's qubit space; the
    /// circuit is unchanged on failure.
    pub fn add_gate(&mut self, gate: Gate) -> IrResult<()> {
        self.validate(&gate)?;
        self.push(gate);
        Ok(())
    }

    /// Append a batch of gates, preserving order.
    ///
    /// The batch is atomic: every entry is validated before any is
    /// applied, and a failure reports the position of the first invalid
    /// entry and leaves the circuit unchanged.
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> IrResult<()> {
        let gates: Vec<Gate> = gates.into_iter().collect();
        for (index, gate) in gates.iter().enumerate() {
            self.validate(gate).map_err(|source| IrError::InvalidGateInBatch {
                index,
                source: Box::new(source),
            })?;
        }
        for gate in gates {
            self.push(gate);
        }
        Ok(())
    }

    fn validate(&self, gate: &Gate) -> IrResult<()> {
        for qubit in gate.operands().qubits() {
            if !self.space.contains(qubit) {
                return Err(IrError::QubitNotInSpace {
                    qubit: qubit.clone(),
                    gate_label: Some(gate.label().to_string()),
                });
            }
        }
        Ok(())
    }

    fn push(&mut self, gate: Gate) {
        if gate.is_two_qubit() {
            self.two_qubit.push(self.gates.len());
        }
        self.gates.push(gate);
    }

    /// The logical-qubit space of the circuit.
    pub fn space(&self) -> &QubitSpace {
        &self.space
    }

    /// Number of logical qubits.
    pub fn num_qubits(&self) -> usize {
        self.space.len()
    }

    /// All gates, in insertion order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Total number of gates.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// The ordered subsequence of two-qubit gates.
    pub fn two_qubit_gates(&self) -> impl Iterator<Item = &Gate> + '_ {
        self.two_qubit.iter().map(move |&i| &self.gates[i])
    }

    /// Number of two-qubit gates.
    pub fn two_qubit_count(&self) -> usize {
        self.two_qubit.len()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "circuit: {} qubits, {} gates ({} two-qubit)",
            self.num_qubits(),
            self.num_gates(),
            self.two_qubit_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::LogicalQubit;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_gates(), 0);
        assert_eq!(circuit.two_qubit_count(), 0);
    }

    #[test]
    fn test_projection_tracks_two_qubit_gates() {
        let mut circuit = Circuit::new(3);
        circuit.add_gate(Gate::two_qubit("cx", 2u32, 1u32).unwrap()).unwrap();
        circuit.add_gate(Gate::single("z", 1u32)).unwrap();
        circuit.add_gate(Gate::two_qubit("cz", 0u32, 2u32).unwrap()).unwrap();

        assert_eq!(circuit.num_gates(), 3);
        assert_eq!(circuit.two_qubit_count(), 2);

        let labels: Vec<_> = circuit.two_qubit_gates().map(Gate::label).collect();
        assert_eq!(labels, vec!["cx", "cz"]);

        // The projection is exactly the pair-operand entries of the
        // stream, in original relative order.
        let expected: Vec<&Gate> = circuit.gates().iter().filter(|g| g.is_two_qubit()).collect();
        let projected: Vec<&Gate> = circuit.two_qubit_gates().collect();
        assert_eq!(projected, expected);
    }

    #[test]
    fn test_out_of_space_operand_rejected() {
        let mut circuit = Circuit::new(2);
        let result = circuit.add_gate(Gate::single("x", 5u32));
        assert!(matches!(
            result,
            Err(IrError::QubitNotInSpace {
                qubit: LogicalQubit::Index(5),
                ..
            })
        ));
        assert_eq!(circuit.num_gates(), 0);
    }

    #[test]
    fn test_named_circuit() {
        let mut circuit = Circuit::with_names(["a", "b", "c"]).unwrap();
        circuit.add_gate(Gate::two_qubit("cx", "a", "b").unwrap()).unwrap();
        assert_eq!(circuit.two_qubit_count(), 1);

        let result = circuit.add_gate(Gate::single("h", "d"));
        assert!(matches!(result, Err(IrError::QubitNotInSpace { .. })));
    }

    #[test]
    fn test_batch_is_atomic() {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Gate::single("h", 0u32)).unwrap();

        let batch = vec![
            Gate::two_qubit("cx", 0u32, 1u32).unwrap(),
            Gate::single("x", 7u32), // out of space
            Gate::single("z", 1u32),
        ];
        let result = circuit.add_gates(batch);

        match result {
            Err(IrError::InvalidGateInBatch { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected batch error, got {other:?}"),
        }

        // Nothing from the failed batch was applied.
        assert_eq!(circuit.num_gates(), 1);
        assert_eq!(circuit.two_qubit_count(), 0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut circuit = Circuit::new(3);
        circuit
            .add_gates(vec![
                Gate::two_qubit("cx", 2u32, 1u32).unwrap(),
                Gate::single("z", 1u32),
                Gate::two_qubit("cz", 1u32, 0u32).unwrap(),
            ])
            .unwrap();

        assert_eq!(circuit.num_gates(), 3);
        let labels: Vec<_> = circuit.gates().iter().map(Gate::label).collect();
        assert_eq!(labels, vec!["cx", "z", "cz"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut circuit = Circuit::with_names(["a", "b"]).unwrap();
        circuit.add_gate(Gate::two_qubit("cx", "a", "b").unwrap()).unwrap();

        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);
        assert_eq!(back.two_qubit_count(), 1);
    }

    #[test]
    fn test_display_summary() {
        let mut circuit = Circuit::new(3);
        circuit.add_gate(Gate::two_qubit("cx", 2u32, 1u32).unwrap()).unwrap();
        circuit.add_gate(Gate::single("z", 1u32)).unwrap();
        assert_eq!(
            format!("{circuit}"),
            "circuit: 3 qubits, 2 gates (1 two-qubit)"
        );
    }
}
