// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline layout and timing settings.

use crate::error::{Result, TimelineError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings used by the timeline core for layout and defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Horizontal indent applied per nesting level
    pub track_indent: f32,
    /// Row height given to tracks created without an explicit height
    pub default_track_height: f32,
    /// Vertical gap between stacked track rows
    pub track_spacing: f32,
    /// Width of the track list column
    pub track_list_width: f32,
    /// Pixels per second at zoom 1.0
    pub units_per_second: f32,
    /// Left margin before frame zero
    pub start_offset: f32,
    /// Frame rate of a new timeline
    pub default_frames_per_second: f32,
    /// Duration of a new timeline
    pub default_duration_frames: i32,
    /// Smallest allowed zoom
    pub min_zoom: f32,
    /// Largest allowed zoom
    pub max_zoom: f32,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            track_indent: 12.0,
            default_track_height: 22.0,
            track_spacing: 0.0,
            track_list_width: 300.0,
            units_per_second: 100.0,
            start_offset: 50.0,
            default_frames_per_second: 30.0,
            default_duration_frames: 150,
            min_zoom: 0.05,
            max_zoom: 20.0,
        }
    }
}

impl TimelineSettings {
    /// Parse settings from a RON string
    pub fn from_ron(source: &str) -> Result<Self> {
        let settings: Self = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges that parsing alone does not enforce
    pub fn validate(&self) -> Result<()> {
        if !(self.min_zoom > 0.0 && self.min_zoom.is_finite()) {
            return Err(TimelineError::InvalidSettings(format!(
                "min_zoom must be positive, got {}",
                self.min_zoom
            )));
        }
        if !(self.max_zoom >= self.min_zoom && self.max_zoom.is_finite()) {
            return Err(TimelineError::InvalidSettings(format!(
                "max_zoom {} is below min_zoom {}",
                self.max_zoom, self.min_zoom
            )));
        }
        if !(self.units_per_second > 0.0 && self.units_per_second.is_finite()) {
            return Err(TimelineError::InvalidSettings(format!(
                "units_per_second must be positive, got {}",
                self.units_per_second
            )));
        }
        Ok(())
    }

    /// Serialize settings to pretty RON
    pub fn to_ron(&self) -> Result<String> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TimelineError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_ron(&content)?;
        tracing::info!("Loaded timeline settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_ron()?;
        std::fs::write(path, content).map_err(|source| TimelineError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved timeline settings to {:?}", path);
        Ok(())
    }

    /// Clamp a zoom value into the configured range
    ///
    /// With inverted bounds the upper bound wins.
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = TimelineSettings::default();
        assert_eq!(settings.track_indent, 12.0);
        assert_eq!(settings.default_duration_frames, 150);
        assert_eq!(settings.default_frames_per_second, 30.0);
    }

    #[test]
    fn test_serialization() {
        let settings = TimelineSettings {
            units_per_second: 250.0,
            ..TimelineSettings::default()
        };
        let ron_str = settings.to_ron().unwrap();
        let loaded = TimelineSettings::from_ron(&ron_str).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let loaded = TimelineSettings::from_ron("(track_indent: 20.0)").unwrap();
        assert_eq!(loaded.track_indent, 20.0);
        assert_eq!(loaded.start_offset, 50.0);
    }

    #[test]
    fn test_invalid_settings() {
        let err = TimelineSettings::from_ron("(track_indent: \"wide\")").unwrap_err();
        assert!(matches!(err, TimelineError::SettingsParse(_)));
    }

    #[test]
    fn test_inverted_zoom_range_rejected() {
        let err = TimelineSettings::from_ron("(min_zoom: 5.0, max_zoom: 1.0)").unwrap_err();
        assert!(matches!(err, TimelineError::InvalidSettings(_)));
        assert!(TimelineSettings::from_ron("(min_zoom: 0.0)").is_err());
        assert!(TimelineSettings::from_ron("(units_per_second: -1.0)").is_err());
    }

    #[test]
    fn test_clamp_zoom_inverted_range() {
        let settings = TimelineSettings {
            min_zoom: 5.0,
            max_zoom: 1.0,
            ..TimelineSettings::default()
        };
        assert_eq!(settings.clamp_zoom(2.0), 1.0);
    }

    #[test]
    fn test_missing_file() {
        let err = TimelineSettings::load(Path::new("/nonexistent/timeline.ron")).unwrap_err();
        assert!(matches!(err, TimelineError::SettingsIo { .. }));
    }

    #[test]
    fn test_clamp_zoom() {
        let settings = TimelineSettings::default();
        assert_eq!(settings.clamp_zoom(0.0), 0.05);
        assert_eq!(settings.clamp_zoom(100.0), 20.0);
        assert_eq!(settings.clamp_zoom(2.0), 2.0);
    }
}
