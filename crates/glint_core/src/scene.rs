//! Scene snapshot read by the shader.
//!
//! Bodies are stored as parallel arrays (struct-of-arrays) indexed by a shared
//! body index. One body is the light: its position, color and size describe
//! the area emitter. The scene is mutated between frames only; shading takes
//! a shared reference for the duration of a call.

use glint_math::{Color, Vec4};
use thiserror::Error;

use crate::body::{Body, BodyKind};
use crate::config::ShadingConfig;

/// Errors raised when editing or validating a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Body index {index} out of range (scene has {len} bodies)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Body {index} reflectivity {value} outside [0, {max}]")]
    ReflectivityOutOfRange { index: usize, value: f32, max: f32 },

    #[error("Body {index} has invalid size {value}")]
    InvalidSize { index: usize, value: f32 },

    #[error("Body {index} has a non-finite position")]
    NonFinitePosition { index: usize },

    #[error("Light body must be a sphere, got {0:?}")]
    LightNotSphere(BodyKind),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Read-mostly body table.
#[derive(Clone, Debug)]
pub struct Scene {
    kinds: Vec<BodyKind>,
    positions: Vec<Vec4>,
    sizes: Vec<f32>,
    colors: Vec<Color>,
    reflectivities: Vec<f32>,
    light: usize,
}

impl Scene {
    /// Create a scene containing only the light, which gets index 0.
    pub fn new(light: Body) -> Self {
        let mut scene = Self {
            kinds: Vec::new(),
            positions: Vec::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            reflectivities: Vec::new(),
            light: 0,
        };
        scene.add_body(light);
        scene
    }

    /// Append a body and return its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.kinds.len();
        self.kinds.push(body.kind);
        self.positions.push(body.position);
        self.sizes.push(body.size);
        self.colors.push(body.color);
        self.reflectivities.push(body.reflectivity);
        log::debug!("Added {:?} body {} at {:?}", body.kind, index, body.position);
        index
    }

    /// Number of bodies, the light included.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// A scene built with [`Scene::new`] always holds its light, so this is
    /// false for any constructed scene.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Index of the light body.
    #[inline]
    pub fn light_index(&self) -> usize {
        self.light
    }

    /// True if `index` is the light.
    #[inline]
    pub fn is_light(&self, index: usize) -> bool {
        index == self.light
    }

    #[inline]
    pub fn kind(&self, index: usize) -> BodyKind {
        debug_assert!(index < self.len(), "body index {index} out of range");
        self.kinds[index]
    }

    #[inline]
    pub fn position(&self, index: usize) -> Vec4 {
        debug_assert!(index < self.len(), "body index {index} out of range");
        self.positions[index]
    }

    #[inline]
    pub fn size(&self, index: usize) -> f32 {
        debug_assert!(index < self.len(), "body index {index} out of range");
        self.sizes[index]
    }

    #[inline]
    pub fn color(&self, index: usize) -> Color {
        debug_assert!(index < self.len(), "body index {index} out of range");
        self.colors[index]
    }

    #[inline]
    pub fn reflectivity(&self, index: usize) -> f32 {
        debug_assert!(index < self.len(), "body index {index} out of range");
        self.reflectivities[index]
    }

    pub fn kinds(&self) -> &[BodyKind] {
        &self.kinds
    }

    pub fn positions(&self) -> &[Vec4] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn reflectivities(&self) -> &[f32] {
        &self.reflectivities
    }

    /// Copy one row out as a [`Body`].
    pub fn body(&self, index: usize) -> Option<Body> {
        (index < self.len()).then(|| Body {
            kind: self.kinds[index],
            position: self.positions[index],
            size: self.sizes[index],
            color: self.colors[index],
            reflectivity: self.reflectivities[index],
        })
    }

    pub fn set_position(&mut self, index: usize, position: Vec4) -> SceneResult<()> {
        self.check_index(index)?;
        self.positions[index] = position;
        Ok(())
    }

    pub fn set_size(&mut self, index: usize, size: f32) -> SceneResult<()> {
        self.check_index(index)?;
        self.sizes[index] = size;
        Ok(())
    }

    pub fn set_color(&mut self, index: usize, color: Color) -> SceneResult<()> {
        self.check_index(index)?;
        self.colors[index] = color;
        Ok(())
    }

    pub fn set_reflectivity(&mut self, index: usize, reflectivity: f32) -> SceneResult<()> {
        self.check_index(index)?;
        self.reflectivities[index] = reflectivity;
        Ok(())
    }

    /// Check the invariants the shader relies on.
    ///
    /// Call this at the renderer boundary, once per frame after edits. The
    /// shading functions themselves assume a valid scene.
    pub fn validate(&self, config: &ShadingConfig) -> SceneResult<()> {
        let light_kind = self.kind(self.light);
        if light_kind != BodyKind::Sphere {
            return Err(SceneError::LightNotSphere(light_kind));
        }

        for index in 0..self.len() {
            let p = self.positions[index];
            if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
                return Err(SceneError::NonFinitePosition { index });
            }

            let size = self.sizes[index];
            if !size.is_finite() || size < 0.0 {
                return Err(SceneError::InvalidSize { index, value: size });
            }

            let value = self.reflectivities[index];
            if !(0.0..=config.max_reflectivity).contains(&value) {
                return Err(SceneError::ReflectivityOutOfRange {
                    index,
                    value,
                    max: config.max_reflectivity,
                });
            }
        }

        log::debug!("Scene with {} bodies passed validation", self.len());
        Ok(())
    }

    fn check_index(&self, index: usize) -> SceneResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(SceneError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}
