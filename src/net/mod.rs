//! Network helpers. Nothing in the current pages calls a backend.

pub mod api;
