pub mod defaults;
pub mod loader;
pub mod validator;

pub use loader::{load_config, load_config_from_str, ConfigError};
pub use validator::{validate_config, ValidationError};
