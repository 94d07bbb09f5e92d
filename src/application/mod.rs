//! Editing sessions, host forms and admin session state.

pub mod editor;
pub mod error;
pub mod forms;
pub mod listing;
pub mod session;
