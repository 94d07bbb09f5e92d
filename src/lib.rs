//! Block-based page editing for the Pagewright content API.
//!
//! `domain` holds the block model and its JSON codec, `application` the
//! editing sessions and admin forms built on it, `infra` the HTTP clients
//! and telemetry, and `presentation` the HTML views of the editor.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
