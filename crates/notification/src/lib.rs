mod config;
mod error;
pub mod relay;
mod service;

pub use config::*;
pub use error::*;
pub use service::*;
