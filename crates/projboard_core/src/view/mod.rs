//! Presentation-facing bindings over the project store.
//!
//! # Responsibility
//! - Keep per-status project lists in sync with store snapshots.
//! - Relay form submits and drop requests into store mutations.
//!
//! # Invariants
//! - Views never mutate another view's state; all coordination goes through
//!   the store's notification fan-out.

pub mod input;
pub mod list;
pub mod render;
