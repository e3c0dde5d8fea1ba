//! Structs required for raycasting

use super::vector::{Point3, Vec3};

use crate::DefaultType;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// A ray defined by its origin and direction: `P(t) = origin + t * direction`.
///
/// The direction is kept as given, not normalized.
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    /// Create a new [Ray] from a position and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get position at `t` along ray.
    pub fn at(&self, t: DefaultType) -> Point3 {
        self.origin + self.direction * t
    }

    #[inline]
    /// Get starting position
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    #[inline]
    /// Get direction
    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Information about a ray/surface intersection.
pub struct HitRecord {
    /// World-space position of the hit.
    pub p: Point3,
    /// Unit normal at the hit, always facing against the incoming ray.
    pub normal: Vec3,
    /// Ray parameter at the hit.
    pub t: DefaultType,
    /// Whether the ray came from outside the surface.
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record for a hit at `t` along `ray`, orienting `outward_normal` with
    /// [set_face_normal](Self::set_face_normal).
    pub fn new(ray: &Ray, t: DefaultType, outward_normal: Vec3) -> Self {
        let mut rec = Self {
            p: ray.at(t),
            t,
            ..Default::default()
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Store `outward_normal` so that it points against `ray`.
    ///
    /// A ray travelling against the outward normal hits the front face and the normal is kept,
    /// otherwise the ray is inside the surface and the stored normal is flipped. Every primitive
    /// goes through here so that shading never has to care which one produced the hit.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction().dot(&outward_normal) < 0.;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn at_zero_is_origin() {
        for (origin, direction) in [
            (Vec3::new(0., 0., 0.), Vec3::new(0., 0., -1.)),
            (Vec3::new(1.5, -2., 8.), Vec3::new(3., 4., 0.)),
            (Vec3::new(-7., 0.25, 1e3), Vec3::default()),
        ] {
            let ray = Ray::new(origin, direction);
            assert_eq!(origin, ray.at(0.));
        }
    }

    #[test]
    fn at_follows_direction() {
        let ray = Ray::new(Vec3::new(1., 2., 3.), Vec3::new(0., 2., -1.));
        assert_eq!(Vec3::new(1., 5., 1.5), ray.at(1.5));
        assert_eq!(Vec3::new(1., 0., 4.), ray.at(-1.));
        // Direction is not normalized.
        assert_eq!(&Vec3::new(0., 2., -1.), ray.direction());
    }

    #[test]
    fn face_normal_outside() {
        let ray = Ray::new(Vec3::default(), Vec3::new(0., 0., -1.));
        let mut rec = HitRecord::default();
        rec.set_face_normal(&ray, Vec3::new(0., 0., 1.));

        assert!(rec.front_face);
        assert_eq!(Vec3::new(0., 0., 1.), rec.normal);
    }

    #[test]
    fn face_normal_inside() {
        let ray = Ray::new(Vec3::default(), Vec3::new(0., 0., -1.));
        let mut rec = HitRecord::default();
        rec.set_face_normal(&ray, Vec3::new(0., 0., -1.));

        assert!(!rec.front_face);
        assert_eq!(Vec3::new(0., 0., 1.), rec.normal);
    }

    #[test]
    fn new_fills_point() {
        let ray = Ray::new(Vec3::new(0., 1., 0.), Vec3::new(2., 0., 0.));
        let rec = HitRecord::new(&ray, 0.5, Vec3::new(-1., 0., 0.));

        assert_eq!(Vec3::new(1., 1., 0.), rec.p);
        assert_eq!(0.5, rec.t);
        assert!(rec.front_face);
    }
}
