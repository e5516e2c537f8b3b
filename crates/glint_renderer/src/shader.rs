//! Surface shading.
//!
//! Combines three terms into one color per hit:
//! - Phong illumination with the ambient term folded into the diffuse floor
//! - Soft shadows from golden-angle sampling of a disk-shaped area light
//! - Multi-bounce mirror reflections, traced with a flat bounded loop
//!
//! Every function here is pure: it reads the scene and config through shared
//! references and returns a value, so calls for different pixels can run on
//! any number of threads at once.

use glint_core::{color_at, normal_at, ConfigError, Scene, SceneError, ShadingConfig};
use glint_math::vector::{cross, dot, mix, mult_each, normalize, perpendicular, reflect};
use glint_math::{Color, Ray, Vec4};
use thiserror::Error;

use crate::intersect::{Hit, Intersector, SceneIntersector};

/// Golden angle, π(3 - √5) radians.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Distance shadow rays are pushed off the surface before tracing.
pub const SHADOW_BIAS: f32 = 0.001;

/// Distance reflected rays are pushed off the surface before tracing.
pub const REFLECTION_BIAS: f32 = 0.001;

/// Scene or config rejected at the start of a frame.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("Invalid shading config: {0}")]
    Config(#[from] ConfigError),
}

/// Result of tracing the reflection chain from one surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflection {
    /// Accumulated reflected color
    pub color: Color,
    /// Weight left for further bounces (product of the hit reflectivities)
    pub weight: f32,
    /// Number of bounces that found a surface
    pub bounces: u32,
}

/// Shades hit points against one scene snapshot.
pub struct Shader<'a, I: Intersector = SceneIntersector> {
    scene: &'a Scene,
    config: &'a ShadingConfig,
    intersector: &'a I,
}

impl<'a, I: Intersector> Shader<'a, I> {
    /// Create a shader without checking its inputs.
    ///
    /// The scene and config are assumed valid. Use [`Shader::for_frame`] at
    /// the renderer boundary to check them once.
    pub fn new(scene: &'a Scene, config: &'a ShadingConfig, intersector: &'a I) -> Self {
        Self {
            scene,
            config,
            intersector,
        }
    }

    /// Validate the config and scene, then create a shader for this frame.
    pub fn for_frame(
        scene: &'a Scene,
        config: &'a ShadingConfig,
        intersector: &'a I,
    ) -> Result<Self, FrameError> {
        config.validate()?;
        scene.validate(config)?;
        log::debug!(
            "Shading frame: {} bodies, {} shadow samples, {} bounces",
            scene.len(),
            config.shadow_sample_size,
            config.reflection_bounce_limit
        );
        Ok(Self::new(scene, config, intersector))
    }

    pub fn scene(&self) -> &Scene {
        self.scene
    }

    pub fn config(&self) -> &ShadingConfig {
        self.config
    }

    /// Phong illumination of `color` at a point on body `index`.
    ///
    /// `ray_direction` is the unit direction of the ray that reached the
    /// point. A `reflectivity` of 0 means fully diffuse and gives no
    /// highlight. The light's color filters the diffuse term and tints the
    /// highlight.
    pub fn phong(
        &self,
        index: usize,
        hit_position: Vec4,
        ray_direction: Vec4,
        color: Color,
        reflectivity: f32,
    ) -> Color {
        let light = self.scene.light_index();
        let light_position = self.scene.position(light);
        let light_color = self.scene.color(light).truncate().extend(0.0);
        let normal = normal_at(self.scene, index, hit_position);
        let light_direction = normalize(light_position - hit_position);

        let diffuse = dot(normal, light_direction).max(self.config.ambient_strength);

        let specular = if reflectivity > 0.0 {
            let factor = dot(reflect(light_direction, normal), ray_direction).max(0.0);
            factor.powf(reflectivity) * self.config.specular_strength
        } else {
            0.0
        };

        mult_each(color, light_color) * diffuse + light_color * specular
    }

    /// Fraction of the area light visible from `hit_position`.
    ///
    /// The light is a disk of radius `2 * light size` facing the point,
    /// sampled along a golden-angle spiral. Returns exactly 1 when no sample
    /// is blocked, otherwise `1 - blocked / (samples * shadow_strength)`,
    /// which can go below 0 when `shadow_strength < 1`. With zero samples
    /// nothing can be blocked, so the result is 1.
    pub fn shadow(&self, hit_position: Vec4) -> f32 {
        let sample_size = self.config.shadow_sample_size;
        let light = self.scene.light_index();
        let light_position = self.scene.position(light);
        let light_size = self.scene.size(light);

        let n = normalize(hit_position - light_position);
        let u = perpendicular(n);
        let v = cross(u, n);

        let mut blocked = 0u32;
        for i in 0..sample_size {
            let angle = GOLDEN_ANGLE * i as f32;
            let r = (i as f32 / sample_size as f32).sqrt();

            let x = 2.0 * light_size * r * angle.cos();
            let y = 2.0 * light_size * r * angle.sin();

            let sample_point = light_position + u * x + v * y;
            let direction = normalize(sample_point - hit_position);
            let ray = Ray::offset(hit_position, direction, SHADOW_BIAS);

            if self.intersector.any_hit(self.scene, &ray) {
                blocked += 1;
            }
        }

        if blocked == 0 {
            1.0
        } else {
            1.0 - blocked as f32 / (sample_size as f32 * self.config.shadow_strength)
        }
    }

    /// Reflected color seen from a point on body `index`.
    pub fn reflection(&self, index: usize, hit_position: Vec4, ray_direction: Vec4) -> Color {
        self.reflection_traced(index, hit_position, ray_direction).color
    }

    /// Trace the reflection chain and report the color along with the
    /// remaining weight and bounce count.
    ///
    /// Each bounce that finds a surface with reflectivity ratio `t` adds that
    /// surface's shaded color times `weight * (1 - t)`, then multiplies
    /// `weight` by `t`. The chain ends on the first miss, after
    /// `reflection_bounce_limit` bounces, or once nothing is left to carry.
    pub fn reflection_traced(
        &self,
        index: usize,
        hit_position: Vec4,
        ray_direction: Vec4,
    ) -> Reflection {
        let mut color = Vec4::ZERO;
        let mut weight = 1.0;
        let mut bounces = 0;

        let mut index = index;
        let mut position = hit_position;
        let mut direction = ray_direction;

        for _ in 0..self.config.reflection_bounce_limit {
            let normal = normal_at(self.scene, index, position);
            let reflected = reflect(direction, normal);
            let ray = Ray::offset(position, reflected, REFLECTION_BIAS);

            let Some(hit) = self.intersector.closest_hit(self.scene, &ray) else {
                break;
            };

            let t = self.scene.reflectivity(hit.index) / self.config.max_reflectivity;
            color += self.surface_color(&hit, reflected) * (weight * (1.0 - t));
            weight *= t;
            bounces += 1;

            index = hit.index;
            position = hit.position;
            direction = reflected;

            if weight <= 0.0 {
                break;
            }
        }

        Reflection {
            color,
            weight,
            bounces,
        }
    }

    /// Final color of a primary hit on body `index`.
    ///
    /// Blends the body's own color with its reflection by reflectivity, lights
    /// the blend with Phong, then darkens it by the shadow factor. The light
    /// itself is drawn unlit in its own color.
    pub fn pixel_color(&self, index: usize, hit_position: Vec4, ray_direction: Vec4) -> Color {
        if self.scene.is_light(index) {
            return self.scene.color(index);
        }

        let reflectivity = self.scene.reflectivity(index);
        let base = color_at(self.scene, index, hit_position);
        // A diffuse body never shows its reflection, so skip tracing it
        let reflection = if reflectivity == 0.0 {
            Vec4::ZERO
        } else {
            self.reflection(index, hit_position, ray_direction)
        };
        let blended = mix(base, reflection, reflectivity / self.config.max_reflectivity);

        self.phong(index, hit_position, ray_direction, blended, reflectivity)
            * self.shadow(hit_position)
    }

    /// Shade whatever a primary ray hits first, or the background on a miss.
    pub fn trace(&self, ray: &Ray) -> Color {
        match self.intersector.closest_hit(self.scene, ray) {
            Some(hit) => self.pixel_color(hit.index, hit.position, ray.direction()),
            None => self.config.background(),
        }
    }

    /// Lit color of a surface reached by a reflection bounce.
    fn surface_color(&self, hit: &Hit, ray_direction: Vec4) -> Color {
        if self.scene.is_light(hit.index) {
            return self.scene.color(hit.index);
        }

        let base = color_at(self.scene, hit.index, hit.position);
        let reflectivity = self.scene.reflectivity(hit.index);
        self.phong(hit.index, hit.position, ray_direction, base, reflectivity)
            * self.shadow(hit.position)
    }
}

/// Shade one primary hit using the brute-force intersector.
pub fn shade(
    scene: &Scene,
    config: &ShadingConfig,
    hit_index: usize,
    hit_position: Vec4,
    ray_direction: Vec4,
) -> Color {
    Shader::new(scene, config, &SceneIntersector).pixel_color(hit_index, hit_position, ray_direction)
}
