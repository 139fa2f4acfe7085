//! Game Configuration
//!
//! All tunable constants for a session, validated once at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diffuse color of every box, sRGB 0..1 (cosmetic, constant).
///
/// Lives here rather than on [`crate::game::state::Block`] so the logic
/// layer stays plain data; only the presentation layer reads it.
pub const BOX_COLOR: [f32; 3] = [157.0 / 255.0, 227.0 / 255.0, 1.0];

/// Background gradient, bottom color (warm yellow), sRGB 0..1.
pub const BG_BOTTOM_COLOR: [f32; 3] = [1.0, 242.0 / 255.0, 153.0 / 255.0];

/// Background gradient, top color (soft red), sRGB 0..1.
pub const BG_TOP_COLOR: [f32; 3] = [1.0, 90.0 / 255.0, 90.0 / 255.0];

/// Invalid configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Oscillator step must be positive
    #[error("oscillator step must be positive, got {0}")]
    NonPositiveStep(f32),
    /// Oscillator bound must be positive
    #[error("oscillator bound must be positive, got {0}")]
    NonPositiveBound(f32),
    /// Base footprint extent must be positive
    #[error("base extent must be positive, got {0}")]
    NonPositiveExtent(f32),
    /// The sweep must be wider than the base box or no cut can ever happen
    #[error("bound {bound} must exceed half the base extent {extent}")]
    BoundInsideBase {
        /// Configured oscillator bound
        bound: f32,
        /// Configured base extent
        extent: f32,
    },
}

/// Tunable session constants.
///
/// The defaults reproduce the classic setup: 5x1x5 boxes sweeping
/// 0.1 units/frame between z = -7 and z = +7.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distance the active box moves per tick along the oscillation axis
    pub step: f32,
    /// Sweep bounds: the box reverses once |z| passes this value
    pub bound: f32,
    /// Full footprint width of the base box along the oscillation axis
    pub base_extent: f32,
    /// Footprint depth on the non-oscillating axis (never cut)
    pub base_depth: f32,
    /// Height of every box (one stack level)
    pub block_height: f32,
    /// Camera height at the start of a run; rises one unit per placement
    pub camera_start_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step: 0.1,
            bound: 7.0,
            base_extent: 5.0,
            base_depth: 5.0,
            block_height: 1.0,
            camera_start_height: 7.0,
        }
    }
}

impl GameConfig {
    /// Validate the configuration before starting a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if self.bound <= 0.0 {
            return Err(ConfigError::NonPositiveBound(self.bound));
        }
        if self.base_extent <= 0.0 {
            return Err(ConfigError::NonPositiveExtent(self.base_extent));
        }
        if self.bound <= self.base_extent / 2.0 {
            return Err(ConfigError::BoundInsideBase {
                bound: self.bound,
                extent: self.base_extent,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_step() {
        let config = GameConfig {
            step: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveStep(0.0)));
    }

    #[test]
    fn rejects_bound_inside_base() {
        let config = GameConfig {
            bound: 2.0,
            base_extent: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoundInsideBase { .. })
        ));
    }
}
