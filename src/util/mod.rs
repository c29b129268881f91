//! Helpers shared by pages and components.

pub mod format;
pub mod markup;
pub mod storage;
