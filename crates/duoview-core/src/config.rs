use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_LAYOUT_MARGIN, DEFAULT_LAYOUT_SPACING, DEFAULT_POINTS_PER_NOTCH, MAX_SCALE, MIN_SCALE,
    WHEEL_NOTCH, WHEEL_UNITS_PER_HALVING,
};
use crate::error::{DuoviewError, Result};
use crate::layout::LayoutMode;

/// Top-level viewer settings, usually read from a TOML file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Initial directory offered by the file chooser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl ViewerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.navigation.validate()?;
        self.layout.validate()
    }
}

/// Zoom bounds and wheel mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Lower bound on the mapped-unit scale.
    pub min_scale: f64,
    /// Upper bound on the mapped-unit scale.
    pub max_scale: f64,
    pub wheel_units_per_halving: f64,
    pub wheel_notch: f64,
    /// egui reports scrolling in points; this converts points to notches.
    pub points_per_notch: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            wheel_units_per_halving: WHEEL_UNITS_PER_HALVING,
            wheel_notch: WHEEL_NOTCH,
            points_per_notch: DEFAULT_POINTS_PER_NOTCH,
        }
    }
}

impl NavigationConfig {
    /// Scale multiplier for a wheel rotation of `delta` wheel units.
    ///
    /// Positive deltas (rotation toward the user) zoom out, negative deltas
    /// zoom in: `2^(-delta / wheel_units_per_halving)`.
    pub fn wheel_multiplier(&self, delta: f64) -> f64 {
        2.0_f64.powf(-delta / self.wheel_units_per_halving)
    }

    /// Convert a scroll distance in screen points into wheel units.
    pub fn points_to_wheel_units(&self, points: f64) -> f64 {
        points / self.points_per_notch * self.wheel_notch
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_scale <= 0.0 {
            return Err(DuoviewError::InvalidConfig(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if self.min_scale >= self.max_scale {
            return Err(DuoviewError::InvalidConfig(format!(
                "min_scale ({}) must be below max_scale ({})",
                self.min_scale, self.max_scale
            )));
        }
        if self.wheel_units_per_halving <= 0.0 || self.points_per_notch <= 0.0 {
            return Err(DuoviewError::InvalidConfig(
                "wheel constants must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    pub margin: f64,
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::SideBySide,
            margin: DEFAULT_LAYOUT_MARGIN,
            spacing: DEFAULT_LAYOUT_SPACING,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if self.margin < 0.0 || self.spacing < 0.0 {
            return Err(DuoviewError::InvalidConfig(
                "layout margin and spacing must not be negative".into(),
            ));
        }
        Ok(())
    }
}
