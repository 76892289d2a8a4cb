//! Feasibility and coverage analysis for wave order-picking instances.
//!
//! Given a set of customer orders (item demands) and warehouse aisles (item
//! supplies), this crate derives the structural metrics used to study and
//! grade picking-wave solutions: per-item scarcity scores, aisle containment
//! relations, single-aisle order satisfiability, solution verification and an
//! exhaustive reference solver for small instances.

/// Derived per-item and per-aisle statistics (rareness, containment, satisfiability, metric tables)
pub mod analysis;

/// Entities modelling instances and candidate solutions
pub mod entities;

/// Importing instances/solutions into and exporting solutions out of this library
pub mod io;

/// Exhaustive reference solver for small instances
pub mod solve;

/// Structural, feasibility, bound and optimality checks on candidate solutions
pub mod verify;
