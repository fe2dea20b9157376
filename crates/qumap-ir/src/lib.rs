//! Qumap Circuit Representation
//!
//! This crate provides the circuit-side data model for the qumap mapping
//! core: logical and physical qubit identifiers, the fixed qubit space a
//! circuit is declared over, gates with one- or two-qubit operand sets,
//! and the [`Circuit`] gate stream with its derived two-qubit projection.
//!
//! # Overview
//!
//! Mapping a circuit onto hardware only constrains the gates that touch
//! two qubits: each one requires its operands to land on adjacent
//! physical qubits. The [`Circuit`] therefore maintains the ordered
//! subsequence of two-qubit gates alongside the full stream, so the
//! mapping core can slice and check it without re-scanning.
//!
//! # Core Components
//!
//! - **Identifiers**: [`LogicalQubit`] (indexed or named) and
//!   [`PhysicalQubit`] (a connectivity-graph node)
//! - **Qubit space**: [`QubitSpace`], the fixed identifier set shared by
//!   a circuit and the mappings built against it
//! - **Gates**: [`Gate`] with an opaque label and an [`Operands`] set of
//!   one or two distinct qubits
//! - **Circuit**: [`Circuit`], the ordered stream plus its two-qubit
//!   projection
//!
//! # Example
//!
//! ```rust
//! use qumap_ir::{Circuit, Gate};
//!
//! let mut circuit = Circuit::new(3);
//! circuit.add_gate(Gate::two_qubit("cx", 2u32, 1u32)?)?;
//! circuit.add_gates(vec![
//!     Gate::two_qubit("cx", 1u32, 0u32)?,
//!     Gate::single("z", 1u32),
//! ])?;
//!
//! assert_eq!(circuit.num_gates(), 3);
//! assert_eq!(circuit.two_qubit_count(), 2);
//! # Ok::<(), qumap_ir::IrError>(())
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, Operands};
pub use qubit::{LogicalQubit, PhysicalQubit, QubitSpace};
