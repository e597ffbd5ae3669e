//! Presentation layer turning calculator results into text.
//!
//! This module formats evaluation results, credit reports and plot samples
//! for the command line front end.

pub mod format;

pub use format::*;
