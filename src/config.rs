use serde::{Deserialize, Serialize};

/// Display preferences for CLI text output. These only shape what gets
/// printed, never how expressions evaluate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Print the total-inches rendering alongside the feet-inches one
    #[serde(default = "default_true")]
    pub show_total_inches: bool,

    /// Print the raw decimal value
    #[serde(default = "default_true")]
    pub show_value: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_total_inches: true,
            show_value: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl DisplayConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: DisplayConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert!(config.show_total_inches);
        assert!(config.show_value);
    }

    #[test]
    fn test_partial_toml() {
        let config: DisplayConfig = toml::from_str("show_value = false").unwrap();
        assert!(config.show_total_inches);
        assert!(!config.show_value);
    }
}
