//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the project record and its status enumeration.
//! - Define the input contract for creating projects.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never deleted; status is the only mutable lifecycle field.

pub mod project;
pub mod validation;
