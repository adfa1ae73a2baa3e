//! Purpose: Internal JSON boundary shared by the container hooks and the codec helpers.
//! Exports: `parse` (decode entrypoints + failure categories), `field` (container hooks).
//! Role: Single seam for serde_json usage so callsites avoid ad hoc decode logic.
//! Invariants: Runtime JSON decoding goes through `parse`.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod field;
pub(crate) mod parse;
