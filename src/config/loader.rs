use std::path::Path;

use crate::error::{A11yGuardError, Result};

use super::model::Config;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".a11y-guard.toml";

pub trait ConfigLoader {
    /// Load and validate configuration.
    ///
    /// # Errors
    /// Returns an error if an explicitly named file is missing or invalid.
    fn load(&self, path: Option<&Path>) -> Result<Config>;
}

pub struct FileConfigLoader;

impl ConfigLoader for FileConfigLoader {
    fn load(&self, path: Option<&Path>) -> Result<Config> {
        let config = match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(A11yGuardError::Config(format!(
                        "config file not found: {}",
                        explicit.display()
                    )));
                }
                Self::parse_file(explicit)?
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::parse_file(default)?
                } else {
                    Config::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }
}

impl FileConfigLoader {
    fn parse_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| A11yGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Render the default configuration as a commented TOML document, used
    /// by the `init` command.
    #[must_use]
    pub fn default_toml() -> String {
        let mut doc = String::from(
            "# a11y-guard configuration\n\
             # Run `a11y-guard rules` for the full rule catalog.\n\n",
        );
        let body = toml::to_string_pretty(&Config::default())
            .unwrap_or_else(|_| String::from("target = \".\"\n"));
        doc.push_str(&body);
        doc
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
