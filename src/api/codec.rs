//! Purpose: Encode and decode whole host records that embed `Optional<T>` fields.
//! Exports: `EncodeOptions`, `encode_record`, `decode_record`, `decode_reader`.
//! Role: Host-side decoder that owns the policy for field decode failures.
//! Invariants: serde_json failures are wrapped with a category hint and kept as `source()`.
//! Invariants: Logs never include payload bytes, only sizes and categories.

use crate::core::error::{Error, ErrorKind};
use crate::json::parse;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Read;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodeOptions {
    pub pretty: bool,
    pub trailing_newline: bool,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self {
            pretty: false,
            trailing_newline: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub fn encode_record<T: Serialize>(record: &T, options: &EncodeOptions) -> Result<Vec<u8>, Error> {
    let encoded = if options.pretty {
        serde_json::to_vec_pretty(record)
    } else {
        serde_json::to_vec(record)
    };
    let mut bytes = encoded.map_err(|err| {
        tracing::warn!(category = ?err.classify(), "record encode failed");
        Error::new(ErrorKind::Encode)
            .with_message("failed to encode record")
            .with_source(err)
    })?;
    if options.trailing_newline {
        bytes.push(b'\n');
    }
    tracing::debug!(len = bytes.len(), pretty = options.pretty, "encoded record");
    Ok(bytes)
}

pub fn decode_record<T: DeserializeOwned>(input: &[u8]) -> Result<T, Error> {
    let record = parse::from_slice(input).map_err(|err| decode_error(err, "record"))?;
    tracing::debug!(len = input.len(), "decoded record");
    Ok(record)
}

pub fn decode_reader<R: Read, T: DeserializeOwned>(reader: R) -> Result<T, Error> {
    let record = parse::from_reader(reader).map_err(|err| {
        if err.is_io() {
            tracing::warn!("record read failed");
            return Error::new(ErrorKind::Io)
                .with_message("failed to read record")
                .with_source(err);
        }
        decode_error(err, "reader")
    })?;
    tracing::debug!("decoded record from reader");
    Ok(record)
}

fn decode_error(err: serde_json::Error, context: &str) -> Error {
    let category = parse::categorize_error(&err);
    tracing::warn!(
        category = category.as_str(),
        line = err.line(),
        column = err.column(),
        "record decode failed"
    );
    Error::new(ErrorKind::Decode)
        .with_message(format!(
            "invalid JSON at line {} column {}",
            err.line(),
            err.column()
        ))
        .with_hint(parse::hint_for_error(&err, context))
        .with_source(err)
}
