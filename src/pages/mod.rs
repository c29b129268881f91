pub mod catalog;
pub mod detail;
pub mod home;
pub mod not_found;
