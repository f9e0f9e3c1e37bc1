//! Placement configuration, persisted as JSON

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_SPIN_PERIOD;
use crate::brush::{BrushSizing, Rgba};
use crate::core::{Error, Result};

/// Tunables for the placement controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Size factor to shape size mapping
    pub sizing: BrushSizing,
    /// Facing-lengths ahead of the camera at which brushes are placed
    pub placement_distance: f32,
    /// Preview color of the cursor node
    pub cursor_color: Rgba,
    /// Seconds per revolution for spinning brushes
    pub spin_period: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            sizing: BrushSizing::default(),
            placement_distance: 1.0,
            cursor_color: Rgba::LIGHT_GRAY,
            spin_period: DEFAULT_SPIN_PERIOD,
        }
    }
}

impl PlacementConfig {
    /// Reject values that cannot describe a usable placement.
    ///
    /// Brush size factors are not checked.
    pub fn validate(&self) -> Result<()> {
        let sizing = &self.sizing;
        if !(sizing.min_size.is_finite() && sizing.min_size > 0.0) {
            return Err(Error::Config(format!("min_size must be positive, got {}", sizing.min_size)));
        }
        if !(sizing.max_size.is_finite() && sizing.max_size >= sizing.min_size) {
            return Err(Error::Config(format!(
                "max_size must be >= min_size ({}), got {}",
                sizing.min_size, sizing.max_size
            )));
        }
        if !self.placement_distance.is_finite() {
            return Err(Error::Config("placement_distance must be finite".into()));
        }
        if !(self.spin_period.is_finite() && self.spin_period > 0.0) {
            return Err(Error::Config(format!("spin_period must be positive, got {}", self.spin_period)));
        }
        Ok(())
    }

    /// Save to file as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded placement config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::SizeMapping;

    #[test]
    fn test_default_is_valid() {
        let config = PlacementConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.placement_distance, 1.0);
        assert_eq!(config.spin_period, 3.0);
        assert_eq!(config.sizing.mapping, SizeMapping::Faithful);
    }

    #[test]
    fn test_save_load_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("placement.json");

        let mut config = PlacementConfig::default();
        config.sizing.mapping = SizeMapping::Clamped;
        config.cursor_color = Rgba::BLUE;
        config.save(&path).unwrap();

        let loaded = PlacementConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PlacementConfig =
            serde_json::from_str(r#"{ "sizing": { "mapping": "clamped" } }"#).unwrap();
        assert_eq!(config.sizing.mapping, SizeMapping::Clamped);
        assert_eq!(config.sizing.min_size, 0.02);
        assert_eq!(config.placement_distance, 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = PlacementConfig::default();
        config.spin_period = 0.0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = PlacementConfig::default();
        config.sizing.max_size = 0.01;
        assert!(config.validate().is_err());

        let mut config = PlacementConfig::default();
        config.placement_distance = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PlacementConfig::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(PlacementConfig::load(&path), Err(Error::Json(_))));
    }
}
