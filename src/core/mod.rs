// Core modules implementing the presence container and error modeling.
pub mod error;
pub mod optional;
