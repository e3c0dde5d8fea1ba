//! Render parameters, passed explicitly to the [Camera](crate::camera::Camera) and
//! [Engine](crate::engine::Engine).

use log::trace;

use crate::{
    error::{Error, Result},
    vector::Point3,
    DefaultType,
};

#[derive(Clone, Debug, PartialEq)]
/// Pinhole camera parameters.
pub struct CameraConfig {
    /// Height of the viewport in world units. Its width follows from the aspect ratio.
    pub viewport_height: DefaultType,
    /// Distance between the camera origin and the viewport.
    pub focal_length: DefaultType,
    /// Camera position.
    pub origin: Point3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_height: 2.,
            focal_length: 1.,
            origin: Point3::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Everything needed to size the raster and place the camera.
pub struct RenderConfig {
    /// Number of pixels width-wise.
    pub image_width: u32,
    /// Width / height.
    pub aspect_ratio: DefaultType,
    #[allow(missing_docs)]
    pub camera: CameraConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16. / 9.,
            camera: CameraConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Number of scanlines, `image_width / aspect_ratio` truncated.
    pub fn image_height(&self) -> u32 {
        (self.image_width as DefaultType / self.aspect_ratio) as u32
    }

    /// Raster size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.image_width, self.image_height())
    }

    /// Viewport width in world units.
    pub fn viewport_width(&self) -> DefaultType {
        self.aspect_ratio * self.camera.viewport_height
    }

    /// Check that the configuration describes a renderable image.
    pub fn validate(&self) -> Result<()> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.) {
            return Err(Error::InvalidAspectRatio(self.aspect_ratio));
        }

        let CameraConfig {
            viewport_height,
            focal_length,
            ..
        } = self.camera;
        if !(viewport_height.is_finite()
            && viewport_height > 0.
            && focal_length.is_finite()
            && focal_length > 0.)
        {
            return Err(Error::InvalidViewport {
                viewport_height,
                focal_length,
            });
        }

        let (width, height) = self.size();
        if width < 2 || height < 2 {
            return Err(Error::InvalidDimensions { width, height });
        }

        trace!("Validated {self:?}, image is {width}x{height}");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = RenderConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!((400, 225), config.size());
    }

    #[test]
    fn height_truncates() {
        let config = RenderConfig {
            image_width: 401,
            ..Default::default()
        };

        // 401 / (16 / 9) = 225.5625
        assert_eq!(225, config.image_height());
    }

    #[test]
    fn rejects_tiny_raster() {
        let config = RenderConfig {
            image_width: 3,
            aspect_ratio: 2.,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDimensions {
                width: 3,
                height: 1
            })
        ));
    }

    #[test]
    fn rejects_bad_aspect_ratio() {
        for aspect_ratio in [0., -1., DefaultType::NAN, DefaultType::INFINITY] {
            let config = RenderConfig {
                aspect_ratio,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidAspectRatio(_))
            ));
        }
    }

    #[test]
    fn rejects_bad_viewport() {
        let config = RenderConfig {
            camera: CameraConfig {
                focal_length: 0.,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(Error::InvalidViewport { .. })
        ));
    }
}
