//! Configuration management for feigngen.
//!
//! This module defines the `Config` struct holding the generator's project
//! layout (output folder, packages, artifact) and the option values that are
//! fed to the [`OptionRegistry`](crate::options::OptionRegistry). A config can
//! be created programmatically or loaded from a YAML or TOML file.
//!
//! # Examples
//!
//! ```no_run
//! use feigngen_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> feigngen_core::Result<()> {
//! let mut config = Config::default();
//! config.invoker_package = "com.example.client".to_string();
//! config.options.insert("clientName", "PetClient");
//! config.save("feigngen.yaml").await?;
//!
//! let loaded = Config::from_file("feigngen.yaml").await?;
//! assert_eq!(loaded.invoker_package, "com.example.client");
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

use crate::options::RawOptions;
use crate::utils::is_valid_package;
use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "FEIGNGEN_CONFIG";

/// File name looked up in the working directory
const LOCAL_CONFIG_FILE: &str = "feigngen.yaml";

/// Configuration for a Java client generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Root folder all generated files are written under
    pub output_folder: String,

    /// Folder holding the template set
    pub template_dir: String,

    /// Java source root, relative to the output folder
    pub source_folder: String,

    /// Package of the client and its support classes
    pub invoker_package: String,

    /// Package of the generated API interfaces
    pub api_package: String,

    /// Package of the generated models
    pub model_package: String,

    /// Build artifact id
    pub artifact_id: String,

    /// Option values passed to the option registry
    pub options: RawOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_folder: format!("generated-code{}java", std::path::MAIN_SEPARATOR),
            template_dir: "java2".to_string(),
            source_folder: "src/main/java".to_string(),
            invoker_package: "io.swagger.client".to_string(),
            api_package: "io.swagger.client.api".to_string(),
            model_package: "io.swagger.client.model".to_string(),
            artifact_id: "swagger-java-client".to_string(),
            options: RawOptions::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file; `.toml` files are read as TOML,
    /// everything else as YAML.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config: Self = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }

    /// Find a configuration file, in order: the `FEIGNGEN_CONFIG` environment
    /// variable, `./feigngen.yaml`, then `feigngen/config.yaml` in the user's
    /// config directory.
    pub fn discover() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            log::warn!(
                "{} points to {}, which does not exist",
                CONFIG_ENV_VAR,
                path.display()
            );
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("feigngen").join("config.yaml"))
            .filter(|path| path.exists())
    }

    /// Check that every package name is a valid Java package
    pub fn validate(&self) -> crate::Result<()> {
        for (field, value) in [
            ("invokerPackage", &self.invoker_package),
            ("apiPackage", &self.api_package),
            ("modelPackage", &self.model_package),
        ] {
            if !is_valid_package(value) {
                return Err(Error::config(format!(
                    "{} '{}' is not a valid Java package name",
                    field, value
                )));
            }
        }
        if self.artifact_id.trim().is_empty() {
            return Err(Error::config("artifactId must not be empty"));
        }
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.options.insert("clientName", "PetClient");
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.invoker_package, "io.swagger.client");
        assert_eq!(loaded.template_dir, "java2");
        assert_eq!(loaded.options.get("clientName"), Some("PetClient"));

        Ok(())
    }

    #[tokio::test]
    async fn test_config_toml_roundtrip() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.artifact_id = "pet-client".to_string();
        config.options.insert("useBeanValidation", "true");
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[tokio::test]
    async fn test_partial_config_uses_defaults() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("partial.yaml");
        tokio::fs::write(
            &file_path,
            "invokerPackage: com.example.client\noptions:\n  useBeanValidation: true\n",
        )
        .await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded.invoker_package, "com.example.client");
        assert_eq!(loaded.model_package, "io.swagger.client.model");
        assert_eq!(loaded.options.get("useBeanValidation"), Some("true"));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_package_rejected() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("bad.yaml");
        tokio::fs::write(&file_path, "apiPackage: io..api\n").await?;

        let err = Config::from_file(&file_path).await.unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("apiPackage")));

        Ok(())
    }
}
