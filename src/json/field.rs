//! Purpose: Attach `Optional<T>` to the serde/serde_json marshaling pipeline.
//! Exports: `JsonField` plus `Serialize`/`Deserialize` impls for `Optional<T>`.
//! Role: Field-level encode/decode hooks; the host record owns keys and layout.
//! Invariants: Absent encodes as `null`; present encodes as the bare value, never wrapped.
//! Invariants: Decode errors from `T` propagate unchanged and are never read as absence.

use crate::core::optional::Optional;
use crate::json::parse;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Explicit encode/decode hooks for a single JSON field value.
///
/// `decode_json` mutates the receiver in place. After an `Err` the receiver
/// is unspecified and should be discarded.
pub trait JsonField {
    fn encode_json(&self) -> Result<Vec<u8>, serde_json::Error>;
    fn decode_json(&mut self, input: &[u8]) -> Result<(), serde_json::Error>;
}

impl<T> JsonField for Optional<T>
where
    T: Serialize + DeserializeOwned,
{
    fn encode_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    fn decode_json(&mut self, input: &[u8]) -> Result<(), serde_json::Error> {
        if is_absent_literal(input) {
            self.clear();
            return Ok(());
        }
        let value: T = parse::from_slice(input)?;
        self.set(value);
        Ok(())
    }
}

fn is_absent_literal(input: &[u8]) -> bool {
    let trimmed = input.trim_ascii();
    trimmed.is_empty() || trimmed == b"null"
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => value.serialize(serializer),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

// Routing through `Option<T>` also makes serde's missing-field path yield `Absent`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}
