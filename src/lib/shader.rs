//! Per-ray color resolution: normal shading on hits, a vertical sky gradient otherwise.

use crate::{color::Color, hittable::Hittable, raycasting::Ray, vector::Vec3, DefaultType};

/// Gradient color looking straight down.
pub const SKY_WHITE: Color = Color::new(1., 1., 1.);
/// Gradient color looking straight up.
pub const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.);

/// Color seen along `ray` in `scene`.
///
/// The nearest hit over `(0, inf]` is colored by mapping its unit normal from `[-1, 1]` to
/// `[0, 1]` per channel. Missed rays get the [background].
pub fn ray_color(ray: &Ray, scene: &(impl Hittable + ?Sized)) -> Color {
    match scene.hit(ray, 0., DefaultType::INFINITY) {
        Some(rec) => normal_color(rec.normal),
        None => background(ray),
    }
}

/// `(n + 1) / 2`, per channel.
pub fn normal_color(normal: Vec3) -> Color {
    let mut color = normal + Color::new(1., 1., 1.);
    color.mult_to(0.5);
    color
}

/// Linear blend from [SKY_WHITE] to [SKY_BLUE] over the height of the ray's unit direction.
pub fn background(ray: &Ray) -> Color {
    let t = 0.5 * (ray.direction().unit_vector().y() + 1.);

    let mut white = SKY_WHITE;
    white.mult_to(1. - t);
    let mut blue = SKY_BLUE;
    blue.mult_to(t);
    white.add_to(&blue);

    white
}
