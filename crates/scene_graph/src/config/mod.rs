//! Configuration system
//!
//! Settings and scene descriptions can be read from TOML or RON files. The
//! format is chosen from the file extension.

pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => Self::from_toml_str(&contents),
            ConfigFormat::Ron => Self::from_ron_str(&contents),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Parse configuration from TOML text
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from RON text
    fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            Ok(Self::Toml)
        } else if path.ends_with(".ron") {
            Ok(Self::Ron)
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// # Scene Graph Configuration
///
/// Tuning knobs for a [`SceneGraph`](crate::scene::SceneGraph) instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneGraphConfig {
    /// Number of nodes to reserve in every parallel store up front
    pub initial_capacity: usize,
    /// Whether rejected mutations are reported through `log::warn!`
    ///
    /// Off by default: rejections are returned to the caller and only
    /// logged at debug level.
    pub log_rejections: bool,
}

impl Default for SceneGraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            log_rejections: false,
        }
    }
}

impl Config for SceneGraphConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_graph_config_defaults_fill_missing_fields() {
        let config = SceneGraphConfig::from_toml_str("initial_capacity = 256").unwrap();
        assert_eq!(config.initial_capacity, 256);
        assert!(!config.log_rejections);
    }

    #[test]
    fn test_scene_graph_config_from_ron() {
        let config = SceneGraphConfig::from_ron_str("(initial_capacity: 8, log_rejections: true)").unwrap();
        assert_eq!(config.initial_capacity, 8);
        assert!(config.log_rejections);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!("scene_graph_config_{}.toml", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let config = SceneGraphConfig { initial_capacity: 12, log_rejections: false };
        config.save_to_file(&path).unwrap();
        let loaded = SceneGraphConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SceneGraphConfig::default().save_to_file("settings.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
