pub mod credit;
pub mod errors;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod services;
pub mod validator;

pub use credit::*;
pub use errors::*;
pub use models::*;
pub use normalizer::*;
pub use services::*;
pub use validator::*;
