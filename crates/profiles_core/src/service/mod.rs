//! Stateful controllers over the pure engines.
//!
//! # Responsibility
//! - Own the list view state and the draft form state.
//! - Talk to collaborators only through the `gateway` traits.
//!
//! # Invariants
//! - Each state object is mutated only by its own controller.
//! - Collaborator calls are the only suspension points; callers may resolve
//!   them synchronously (`*_with` helpers) or out of band (two-phase API).

pub mod form_controller;
pub mod list_coordinator;
