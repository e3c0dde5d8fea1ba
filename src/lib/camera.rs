//! Definition of the camera geometry.

use crate::{
    config::RenderConfig,
    raycasting::Ray,
    vector::{Point3, Vec3},
    DefaultType,
};

#[derive(Clone, Debug, PartialEq)]
/// Viewport rectangle in world space, seen from `origin`.
///
/// Derived once from a [RenderConfig] and kept for the duration of a render pass.
pub struct Camera {
    /// Position.
    pub origin: Point3,
    /// Full width of the viewport along +X.
    pub horizontal: Vec3,
    /// Full height of the viewport along +Y.
    pub vertical: Vec3,
    /// World-space position of the viewport's bottom-left corner.
    pub lower_left_corner: Point3,
}

impl Camera {
    /// Compute the viewport geometry for `config`.
    pub fn new(config: &RenderConfig) -> Self {
        let origin = config.camera.origin;
        let horizontal = Vec3::new(config.viewport_width(), 0., 0.);
        let vertical = Vec3::new(0., config.camera.viewport_height, 0.);

        let lower_left_corner = origin
            - horizontal / 2.
            - vertical / 2.
            - Vec3::new(0., 0., config.camera.focal_length);

        Self {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    /// Ray from the camera origin through the viewport point at normalized coordinates `(u, v)`,
    /// `(0, 0)` being the bottom-left corner and `(1, 1)` the top-right one.
    pub fn pixel_to_ray(&self, u: DefaultType, v: DefaultType) -> Ray {
        let mut direction = self.lower_left_corner;
        direction.add_to(&(self.horizontal * u));
        direction.add_to(&(self.vertical * v));
        direction.subtract_from(&self.origin);

        Ray::new(self.origin, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}
