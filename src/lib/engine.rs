//! Scanline renderer tying the camera, the scene and the shader together.

use std::{io::Write, path::Path, time::Instant};

use log::{debug, info};

use crate::{
    camera::Camera,
    color::Color,
    config::RenderConfig,
    error::Result,
    image::{Image, PixelSink, PpmFormat, PpmWriter},
    scene::Scene,
    shader::ray_color,
    DefaultType,
};

/// Render engine.
pub struct Engine {
    config: RenderConfig,
    camera: Camera,
    scene: Scene,
}

impl Engine {
    /// Create an Engine with an empty [Scene] from the given parameters.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            camera: Camera::new(&config),
            config,
            scene: Scene::new(),
        })
    }

    /// Get the [Scene] to add entities to it.
    pub fn scene(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Replace the whole [Scene].
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[allow(missing_docs)]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Render a frame, feeding every pixel to `sink` top scanline first, left to right.
    pub fn render_into(&self, sink: &mut impl PixelSink) -> Result<()> {
        let (width, height) = self.config.size();
        let start = Instant::now();

        info!("Rendering {width}x{height} image, {} objects", self.scene.len());
        sink.begin(width, height)?;

        let mut step = 0;
        for j in (0..height).rev() {
            debug!("Scanlines remaining: {}", j + 1);

            let v = j as DefaultType / (height - 1) as DefaultType;
            for i in 0..width {
                let u = i as DefaultType / (width - 1) as DefaultType;
                sink.write_pixel(self.pixel_color(u, v))?;
            }

            let new_step = progress_step(height - j, height);
            if new_step > step {
                step = new_step;
                info!("{}%", step * 10);
            }
        }

        sink.finish()?;
        info!("Done in {:.2?}", start.elapsed());

        Ok(())
    }

    /// Use [render_into](Self::render_into) to render a frame in memory.
    pub fn render(&self) -> Result<Image<Color>> {
        let mut image = Image::default();
        self.render_into(&mut image)?;
        Ok(image)
    }

    /// Stream a frame to `writer` as a PPM image.
    pub fn render_to_writer<W: Write>(&self, writer: W, format: PpmFormat) -> Result<()> {
        self.render_into(&mut PpmWriter::new(writer, format))
    }

    /// Render a frame and save the result as a file to a given path, creating any missing
    /// directories on the way.
    pub fn render_to_path(&self, path: &Path, format: PpmFormat) -> Result<()> {
        info!("Writing {path:?}");
        self.render_into(&mut PpmWriter::create(path, format)?)
    }

    fn pixel_color(&self, u: DefaultType, v: DefaultType) -> Color {
        let ray = self.camera.pixel_to_ray(u, v);
        ray_color(&ray, &self.scene)
    }
}

/// Completed tenths after `done` of `total` scanlines.
fn progress_step(done: u32, total: u32) -> u32 {
    (done as u64 * 10 / total as u64) as u32
}
