//! Configuration loading.
//!
//! Settings live in a TOML file under the user's config directory; a
//! missing file yields defaults, and CLI flags override individual values.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
