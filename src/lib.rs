//! Purpose: Validating decoder for responses an agent receives from its control-plane backend.
//! Exports: `api` (public surface) and `core` (document, verification, extraction, errors).
//! Role: Pure, synchronous layer between the transport and the agent subsystems.
//! Invariants: Malformed or hostile input yields absent/empty results, never a panic.
//! Invariants: An `UpdatePackage` only exists after its checksum has been confirmed.
pub mod api;
pub mod core;
mod json;
