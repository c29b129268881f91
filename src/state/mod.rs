//! Session state shared through context.

pub mod notifications;
pub mod theme;
pub mod tutorial;
