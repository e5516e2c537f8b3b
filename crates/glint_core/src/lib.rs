//! Glint Core - scene snapshot and shading configuration.
//!
//! This crate provides:
//!
//! - **Bodies**: the closed shape set (`BodyKind`) with surface normal and
//!   color queries
//! - **Scene**: a struct-of-arrays body table with one distinguished light
//! - **Config**: `ShadingConfig`, loadable from JSON
//!
//! # Example
//!
//! ```
//! use glint_core::{Body, Scene, ShadingConfig};
//! use glint_math::Vec4;
//!
//! let light = Body::sphere(Vec4::new(0.0, 5.0, 0.0, 0.0), 0.5, Vec4::ONE, 0.0);
//! let mut scene = Scene::new(light);
//! scene.add_body(Body::plane(-1.0, Vec4::splat(0.8), 0.0));
//!
//! assert!(scene.validate(&ShadingConfig::default()).is_ok());
//! ```

pub mod body;
pub mod config;
pub mod scene;

// Re-export commonly used types
pub use body::{color_at, normal_at, Body, BodyKind};
pub use config::{ConfigError, ConfigResult, ShadingConfig};
pub use scene::{Scene, SceneError, SceneResult};
