mod global_config;
mod project_config;

pub use global_config::*;
pub use project_config::*;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
