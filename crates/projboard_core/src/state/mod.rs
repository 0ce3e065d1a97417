//! Observable state containers.
//!
//! # Responsibility
//! - Hold the authoritative project collection.
//! - Broadcast snapshots to subscribers after every mutation.

pub mod store;
