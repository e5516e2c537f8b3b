//! Simple shading example.
//!
//! Renders a checkerboard floor, a few spheres and an area light, then saves
//! the result in PPM format. An optional first argument names a JSON file
//! with shading settings.

use anyhow::Result;
use glint_renderer::{Body, Color, Ray, Scene, SceneIntersector, Shader, ShadingConfig, Vec4};
use glint_math::vector::{cross, normalize};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const VFOV_DEGREES: f32 = 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ShadingConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ShadingConfig::default(),
    };

    let scene = build_scene();
    let shader = Shader::for_frame(&scene, &config, &SceneIntersector)?;

    log::info!(
        "Rendering {}x{} with {} shadow samples, {} bounces",
        WIDTH,
        HEIGHT,
        config.shadow_sample_size,
        config.reflection_bounce_limit
    );

    let start = std::time::Instant::now();
    let camera = PinholeCamera::new(
        Vec4::new(0.0, 1.5, 6.0, 0.0),
        Vec4::new(0.0, 0.5, 0.0, 0.0),
    );

    // Rows are independent; each shading call only reads the scene
    let pixels: Vec<Color> = (0..HEIGHT)
        .into_par_iter()
        .flat_map_iter(|y| {
            let shader = &shader;
            let camera = &camera;
            (0..WIDTH).map(move |x| shader.trace(&camera.ray(x, y)))
        })
        .collect();

    log::info!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&pixels, filename)?;
    log::info!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let light = Body::sphere(Vec4::new(-3.0, 6.0, 2.0, 0.0), 0.4, Vec4::ONE, 0.0);
    let mut scene = Scene::new(light);

    // Floor
    scene.add_body(Body::plane(0.0, Vec4::new(0.9, 0.9, 0.9, 0.0), 16.0));

    // Diffuse, glossy and mirror spheres
    scene.add_body(Body::sphere(
        Vec4::new(-2.2, 1.0, 0.0, 0.0),
        1.0,
        Vec4::new(0.8, 0.2, 0.1, 0.0),
        0.0,
    ));
    scene.add_body(Body::sphere(
        Vec4::new(0.0, 1.0, -1.0, 0.0),
        1.0,
        Vec4::new(0.1, 0.3, 0.8, 0.0),
        32.0,
    ));
    scene.add_body(Body::sphere(
        Vec4::new(2.2, 1.0, 0.0, 0.0),
        1.0,
        Vec4::new(0.9, 0.9, 0.9, 0.0),
        96.0,
    ));

    log::info!("Created {} bodies", scene.len());
    scene
}

/// Minimal look-at camera, one ray through each pixel center.
struct PinholeCamera {
    origin: Vec4,
    pixel00: Vec4,
    delta_u: Vec4,
    delta_v: Vec4,
}

impl PinholeCamera {
    fn new(look_from: Vec4, look_at: Vec4) -> Self {
        let viewport_height = 2.0 * (VFOV_DEGREES.to_radians() / 2.0).tan();
        let viewport_width = viewport_height * WIDTH as f32 / HEIGHT as f32;

        let w = normalize(look_from - look_at);
        let u = normalize(cross(Vec4::Y, w));
        let v = cross(w, u);

        let delta_u = u * (viewport_width / WIDTH as f32);
        let delta_v = -v * (viewport_height / HEIGHT as f32);
        let upper_left =
            look_from - w - u * (viewport_width / 2.0) + v * (viewport_height / 2.0);

        Self {
            origin: look_from,
            pixel00: upper_left + (delta_u + delta_v) * 0.5,
            delta_u,
            delta_v,
        }
    }

    fn ray(&self, x: u32, y: u32) -> Ray {
        let target = self.pixel00 + self.delta_u * x as f32 + self.delta_v * y as f32;
        Ray::new(self.origin, normalize(target - self.origin))
    }
}

/// Gamma-correct (gamma = 2.0) and quantize to 8 bits.
fn to_rgb8(color: Color) -> [u8; 3] {
    let encode = |c: f32| (255.0 * c.max(0.0).sqrt().clamp(0.0, 1.0)) as u8;
    [encode(color.x), encode(color.y), encode(color.z)]
}

fn save_ppm(pixels: &[Color], filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", WIDTH, HEIGHT)?;
    writeln!(writer, "255")?;

    for color in pixels {
        let [r, g, b] = to_rgb8(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}
