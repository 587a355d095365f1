mod loader;
mod model;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE, FileConfigLoader};
pub use model::{Config, OutputConfig};
