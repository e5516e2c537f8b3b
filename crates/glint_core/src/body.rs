//! Body shapes and their surface queries.
//!
//! The shape set is closed, so dispatch is a plain `match` on [`BodyKind`]
//! instead of a trait object per body.

use glint_math::vector::{mult, normalize};
use glint_math::{Color, Vec4};
use serde::{Deserialize, Serialize};

use crate::scene::Scene;

/// Brightness factor applied to the odd tiles of a checkerboard plane.
pub const CHECKER_DARKEN: f32 = 0.5;

/// Shape category of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// Sphere centered at the body position; `size` is the radius.
    Sphere,
    /// Infinite horizontal plane at the body position's height, drawn with a
    /// checkerboard pattern. `size` is unused.
    Plane,
}

impl BodyKind {
    /// Outward surface normal at `hit_position`.
    pub fn normal_at(self, hit_position: Vec4, body_position: Vec4) -> Vec4 {
        match self {
            BodyKind::Sphere => normalize(hit_position - body_position),
            BodyKind::Plane => Vec4::Y,
        }
    }

    /// Surface color at `hit_position`.
    ///
    /// Spheres return the stored color. Planes alternate between the stored
    /// color and a darkened copy on unit tiles in the xz plane.
    pub fn color_at(self, hit_position: Vec4, stored_color: Color) -> Color {
        match self {
            BodyKind::Sphere => stored_color,
            BodyKind::Plane => {
                let tile = hit_position.x.floor() as i64 + hit_position.z.floor() as i64;
                if tile.rem_euclid(2) == 0 {
                    stored_color
                } else {
                    mult(stored_color, CHECKER_DARKEN)
                }
            }
        }
    }
}

/// One body, as a standalone value.
///
/// The scene stores bodies column-wise; this struct is how a row goes in and
/// comes back out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub position: Vec4,
    pub size: f32,
    pub color: Color,
    pub reflectivity: f32,
}

impl Body {
    /// Create a sphere with the given center and radius.
    pub fn sphere(center: Vec4, radius: f32, color: Color, reflectivity: f32) -> Self {
        Self {
            kind: BodyKind::Sphere,
            position: center,
            size: radius,
            color,
            reflectivity,
        }
    }

    /// Create a checkerboard floor at height `y`.
    pub fn plane(y: f32, color: Color, reflectivity: f32) -> Self {
        Self {
            kind: BodyKind::Plane,
            position: Vec4::new(0.0, y, 0.0, 0.0),
            size: 0.0,
            color,
            reflectivity,
        }
    }
}

/// Outward normal of body `index` at `hit_position`.
pub fn normal_at(scene: &Scene, index: usize, hit_position: Vec4) -> Vec4 {
    scene.kind(index).normal_at(hit_position, scene.position(index))
}

/// Surface color of body `index` at `hit_position`.
pub fn color_at(scene: &Scene, index: usize, hit_position: Vec4) -> Color {
    scene.kind(index).color_at(hit_position, scene.color(index))
}
