/// Ledger configuration loading from config.toml
pub mod ledger;

/// Participant nickname configuration from environment variables
pub mod users;

pub use ledger::{Config, load_config, load_default_config};
