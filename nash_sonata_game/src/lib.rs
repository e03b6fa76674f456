// Nash Sonata game model.
//
// Two-player simultaneous-move games over a finite, ordered strategy list,
// plus the pure-strategy Nash equilibrium search used by the music crate.
// Nothing in here knows about sound: a game carries an opaque renderer type
// `R` per strategy and player role, and the music crate decides what `R` is.
//
// Architecture:
// - strategy.rs: the `Strategy` trait implemented by each game's closed enum,
//   and the `Role` (row/column player) type
// - payoff.rs: `Payoff` pairs and the dense, validated `PayoffMatrix`
// - game.rs: `GameDefinition` construction and validation (strategy list,
//   total payoff mapping, optional total renderer mapping)
// - solver.rs: per-row best-response scan (`RowScan`) and `solve`
// - error.rs: `GameError`, the construction-time failures
//
// Everything here is deterministic and single-threaded. A definition is
// immutable once built, so the same definition always yields the same
// equilibria in the same order.

pub mod error;
pub mod game;
pub mod payoff;
pub mod solver;
pub mod strategy;

pub use error::GameError;
pub use game::{GameDefinition, RoleBinding};
pub use payoff::{Payoff, PayoffMatrix};
pub use solver::{Equilibrium, RowScan, solve};
pub use strategy::{Role, Strategy};
