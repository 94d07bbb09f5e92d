//! HTML rendering of the block editor, independent of any web server.

pub mod editor;
pub mod views;
