mod load;
mod types;

pub use load::{apply_env_overrides, load_from, DEFAULT_CONFIG_FILE};
pub use types::*;
