//! Purpose: Internal JSON parsing boundary shared by the response decoder.
//! Exports: `parse` module with decode and diagnostic helpers.
//! Role: Single seam for parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: Response bodies are decoded only through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
