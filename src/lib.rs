pub mod assets;
pub mod config;
pub mod content;
pub mod flash;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};
