//! Shading configuration.
//!
//! All tunables live in one immutable struct passed by reference into every
//! shading call. It can be loaded from JSON; missing fields take the defaults.

use glint_math::{Color, Vec4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or checking a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Shading constants and per-frame limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Floor of the diffuse term; doubles as the ambient contribution
    pub ambient_strength: f32,

    /// Scale of the white specular highlight
    pub specular_strength: f32,

    /// Reflectivity value that means "perfect mirror"
    pub max_reflectivity: f32,

    /// Divisor on the occluded-sample fraction. Values below 1 let heavily
    /// shadowed points go negative; this is not clamped.
    pub shadow_strength: f32,

    /// Shadow rays per shaded point. Zero disables shadows.
    pub shadow_sample_size: u32,

    /// Maximum reflection bounces traced per shaded point
    pub reflection_bounce_limit: u32,

    /// RGB returned for primary rays that hit nothing
    pub background: [f32; 3],
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            ambient_strength: 0.05,
            specular_strength: 0.5,
            max_reflectivity: 96.0,
            shadow_strength: 1.0 / 0.8,
            shadow_sample_size: 64,
            reflection_bounce_limit: 5,
            background: [0.0, 0.0, 0.0],
        }
    }
}

impl ShadingConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: ShadingConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded shading config: {} shadow samples, {} reflection bounces",
            config.shadow_sample_size,
            config.reflection_bounce_limit
        );
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the shadow sample count.
    pub fn with_shadow_samples(mut self, samples: u32) -> Self {
        self.shadow_sample_size = samples;
        self
    }

    /// Set the reflection bounce limit.
    pub fn with_bounce_limit(mut self, bounces: u32) -> Self {
        self.reflection_bounce_limit = bounces;
        self
    }

    /// Set the shadow strength divisor.
    pub fn with_shadow_strength(mut self, strength: f32) -> Self {
        self.shadow_strength = strength;
        self
    }

    /// Background as a color.
    pub fn background(&self) -> Color {
        let [r, g, b] = self.background;
        Vec4::new(r, g, b, 0.0)
    }

    /// Reject values the shading math cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        let strengths = [
            ("ambient_strength", self.ambient_strength),
            ("specular_strength", self.specular_strength),
            ("shadow_strength", self.shadow_strength),
        ];
        for (name, value) in strengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if !self.max_reflectivity.is_finite() || self.max_reflectivity <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_reflectivity must be positive, got {}",
                self.max_reflectivity
            )));
        }

        if self.shadow_strength == 0.0 {
            return Err(ConfigError::Invalid(
                "shadow_strength must be non-zero".to_string(),
            ));
        }

        if self.shadow_strength < 1.0 {
            log::warn!(
                "shadow_strength {} < 1: fully occluded points will shade below zero",
                self.shadow_strength
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_defaults() {
        let config = ShadingConfig::default();
        assert_eq!(config.ambient_strength, 0.05);
        assert_eq!(config.specular_strength, 0.5);
        assert_eq!(config.max_reflectivity, 96.0);
        assert!((config.shadow_strength - 1.25).abs() < 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        init_logger();
        let config =
            ShadingConfig::from_json(r#"{ "shadow_sample_size": 8, "background": [0.1, 0.2, 0.3] }"#)
                .unwrap();

        assert_eq!(config.shadow_sample_size, 8);
        assert_eq!(config.reflection_bounce_limit, 5);
        assert_eq!(config.background(), Vec4::new(0.1, 0.2, 0.3, 0.0));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ShadingConfig::default().with_shadow_samples(16).with_bounce_limit(2);
        let json = config.to_json().unwrap();
        let parsed = ShadingConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ShadingConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ShadingConfig {
            max_reflectivity: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ShadingConfig {
            ambient_strength: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ShadingConfig::default().with_shadow_strength(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weak_shadow_strength_is_accepted() {
        init_logger();
        let config = ShadingConfig::default().with_shadow_strength(0.5);
        assert!(config.validate().is_ok());
    }
}
