//! Qumap Mapping Core
//!
//! This crate decides whether a logical-to-physical qubit assignment can
//! host a circuit on a given chip, one window of two-qubit gates at a
//! time. It provides the feasibility primitives an actual mapping search
//! (backtracking, annealing, ILP, ...) is built on; the search policy
//! itself stays with the caller.
//!
//! # Architecture
//!
//! ```text
//! Circuit + Chip ──► slice() ──► ordered slices
//!                                     │
//! Mapping ────────────────────────────┤
//!                                     ▼
//!                              is_feasible() ──► bool
//!                                     │
//!                                     ▼
//!                    run_search() + SearchStrategy (caller's policy)
//! ```
//!
//! - [`Chip`]: immutable connectivity wrapper with a frozen edge density
//! - [`Mapping`]: partial, mutable logical→physical assignment
//! - [`slice()`]: density-driven partition of the two-qubit gate stream
//! - [`is_feasible`]: per-slice adjacency check, fail-fast
//! - [`run_search`]: slice-order driver behind the [`SearchStrategy`]
//!   trait
//!
//! # Example
//!
//! ```rust
//! use qumap_ir::{Circuit, Gate};
//! use qumap_layout::{Chip, Mapping, is_feasible, slice};
//!
//! // A three-qubit chain: 1-2-3.
//! let chip = Chip::from_edges([(1, 2), (2, 3)])?;
//!
//! let mut circuit = Circuit::with_names(["a", "b", "c"])?;
//! circuit.add_gate(Gate::two_qubit("cx", "a", "b")?)?;
//! circuit.add_gate(Gate::two_qubit("cx", "b", "c")?)?;
//!
//! let mut mapping = Mapping::with_names(3, ["a", "b", "c"])?;
//! mapping.starting_mapping([
//!     ("a".into(), 1u32.into()),
//!     ("b".into(), 2u32.into()),
//!     ("c".into(), 3u32.into()),
//! ])?;
//!
//! // Both gates land on coupling edges, so every window checks out.
//! for window in slice(&circuit, &chip) {
//!     assert!(is_feasible(&mapping, &window, &chip)?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod chip;
pub mod error;
pub mod feasibility;
pub mod mapping;
pub mod search;
pub mod slice;

pub use chip::{Chip, ConnectivitySpec};
pub use error::{LayoutError, LayoutResult};
pub use feasibility::is_feasible;
pub use mapping::Mapping;
pub use search::{Revision, SearchOutcome, SearchStrategy, run_search};
pub use slice::{Slice, slice};
