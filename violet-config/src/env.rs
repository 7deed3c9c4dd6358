// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;

/// Environment variable loader
///
/// Reads `<PREFIX>_<KEY>` variables from the process environment, or from a
/// fixed map when built with [`EnvLoader::from_vars`].
#[derive(Debug, Clone)]
pub struct EnvLoader {
    prefix: Option<String>,
    vars: Option<HashMap<String, String>>,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix, vars: None }
    }

    /// Create a loader that reads from the given variables instead of the
    /// process environment
    pub fn from_vars<I, K, V>(prefix: Option<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix,
            vars: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Create a loader from a `.env` file without touching the process
    /// environment
    pub fn from_dotenv(prefix: Option<String>, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let iter = dotenvy::from_path_iter(path.as_ref())
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::ParseError(e.to_string()))?;
            vars.insert(key, value);
        }

        Ok(Self {
            prefix,
            vars: Some(vars),
        })
    }

    /// Full variable name for a key
    pub fn var_name(&self, key: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = self.var_name(key);

        match self.vars {
            Some(ref vars) => vars
                .get(&full_key)
                .cloned()
                .ok_or(ConfigError::EnvError(env::VarError::NotPresent)),
            None => env::var(&full_key).map_err(ConfigError::EnvError),
        }
    }

    /// Load a variable, treating unset and empty the same
    pub fn load_non_empty(&self, key: &str) -> Option<String> {
        self.load_var(key).ok().filter(|v| !v.is_empty())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}
