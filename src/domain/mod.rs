//! Domain layer types and invariants.

pub mod blocks;
pub mod error;
pub mod menu;
pub mod ordering;
pub mod slug;
