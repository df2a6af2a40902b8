pub mod context;
pub mod template;

pub use context::{Context, Key, Value};
