//! Purpose: Explicit-presence optional values with a faithful JSON boundary.
//! Exports: `api` (container, JSON field hooks, host-record codec, errors).
//! Role: Library crate; `Optional<T>` is the only stateful type it defines.
//! Invariants: Absence encodes as JSON `null`; presence encodes as the bare value.
//! Invariants: The container never logs; diagnostics live in the codec helpers.
pub mod api;
mod core;
mod json;

pub use api::{JsonField, Optional};
