// Configuration management for Violet providers
//
// Settings are layered: values written by the user win, a settings file can
// supply the rest, and `VIOLET_*` environment variables fill whatever is
// still unset.

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, MissingCredential, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{ENV_PREFIX, ProviderSettings, ResolvedSettings};
pub use validation::{ConfigValidator, Validate};
