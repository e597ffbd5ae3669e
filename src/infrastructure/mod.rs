//! Infrastructure layer providing external service integrations.
//!
//! This module contains the file I/O used to keep calculator settings
//! between runs.

pub mod persistence;

pub use persistence::*;
