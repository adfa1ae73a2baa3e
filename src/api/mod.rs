//! Purpose: Define the stable public Rust API boundary for the crate.
//! Exports: `Optional`, `JsonField`, host-record codec helpers, `Error`/`ErrorKind`.
//! Role: Public, additive-only surface; hides the internal core/json modules.
//! Invariants: This module is the only public path to the container and its hooks.
//! Invariants: Internal modules remain private and are not directly exposed.

mod codec;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::optional::Optional;
pub use crate::json::field::JsonField;
pub use codec::{EncodeOptions, decode_reader, decode_record, encode_record};
