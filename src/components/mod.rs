//! Reusable view pieces shared by the pages.

pub mod button;
pub mod card;
pub mod diagram;
pub mod input;
pub mod rich_text;
pub mod section;
pub mod tabs;
pub mod toast;
pub mod tutorial;
