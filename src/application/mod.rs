//! Application layer coordinating calculator sessions.
//!
//! This module sits between the engine in the domain layer and whatever
//! front end drives it, handling display constants, settings, credit
//! dispatch and plot sampling.

pub mod constants;
pub mod errors;
pub mod session;
pub mod settings;

pub use constants::*;
pub use errors::*;
pub use session::*;
pub use settings::*;
