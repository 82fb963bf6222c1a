//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! These are *transport* errors: they describe the plumbing between a client and its
//! actor, never the absence of an entity. A lookup that finds nothing is a successful
//! `Ok(None)`.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Duplicate id in seed: {0}")]
    DuplicateId(String),
    #[error("Invalid entity {id}: {reason}")]
    InvalidEntity { id: String, reason: String },
}
