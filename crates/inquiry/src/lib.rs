mod compose;
mod handle;
mod types;

pub use handle::*;
pub use types::*;
