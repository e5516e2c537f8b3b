//! Glint Renderer - hit-point shading.
//!
//! Turns a primary ray hit into a final color by combining Phong
//! illumination, soft shadows from an area light, and bounded multi-bounce
//! reflections.
//!
//! Ray generation and work scheduling are left to the caller; see
//! `examples/simple_render.rs` for a minimal pinhole renderer on top.

mod intersect;
mod shader;

pub use intersect::{Hit, Intersector, SceneIntersector};
pub use shader::{
    shade, FrameError, Reflection, Shader, GOLDEN_ANGLE, REFLECTION_BIAS, SHADOW_BIAS,
};

/// Re-export the scene and math types callers need alongside the shader
pub use glint_core::{Body, BodyKind, Scene, ShadingConfig};
pub use glint_math::{Color, Ray, Vec4};
