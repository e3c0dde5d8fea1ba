//! Basic primitives necessary for rendering

use crate::{
    hittable::{in_range, Hittable},
    raycasting::{HitRecord, Ray},
    vector::Point3,
    DefaultType,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Sphere given by its center and radius.
pub struct Sphere {
    center: Point3,
    radius: DefaultType,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: DefaultType) -> Self {
        Self { center, radius }
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn radius(&self) -> DefaultType {
        self.radius
    }
}

impl Hittable for Sphere {
    /// Solves `|P(t) - center|² = radius²` for `t`.
    ///
    /// The nearer root is tried first and the farther one only if the nearer falls outside the
    /// interval, so the reported hit is always the nearest valid crossing.
    fn hit(&self, ray: &Ray, t_min: DefaultType, t_max: DefaultType) -> Option<HitRecord> {
        let oc = *ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0. {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let mut root = (-half_b - sqrtd) / a;
        if !in_range(root, t_min, t_max) {
            root = (-half_b + sqrtd) / a;
            if !in_range(root, t_min, t_max) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;

        Some(HitRecord::new(ray, root, outward_normal))
    }
}

#[cfg(test)]
mod test {
    use float_eq::assert_float_eq;

    use super::*;
    use crate::vector::Vec3;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::new(0., 0., -1.), 0.5)
    }

    #[test]
    fn hit_front() {
        let ray = Ray::new(Vec3::default(), Vec3::new(0., 0., -1.));
        let rec = unit_sphere()
            .hit(&ray, 0., DefaultType::INFINITY)
            .expect("Ray should hit the sphere");

        assert_float_eq!(0.5, rec.t, abs <= 1e-12);
        assert_float_eq!(0., (rec.p - Vec3::new(0., 0., -0.5)).length(), abs <= 1e-12);
        assert_float_eq!(0., (rec.normal - Vec3::new(0., 0., 1.)).length(), abs <= 1e-12);
        assert!(rec.front_face);
    }

    #[test]
    fn miss_parallel() {
        let ray = Ray::new(Vec3::default(), Vec3::new(1., 0., 0.));
        assert_eq!(None, unit_sphere().hit(&ray, 0., DefaultType::INFINITY));
    }

    #[test]
    fn miss_behind() {
        let ray = Ray::new(Vec3::default(), Vec3::new(0., 0., 1.));
        assert_eq!(None, unit_sphere().hit(&ray, 0., DefaultType::INFINITY));
    }

    #[test]
    fn far_root_when_near_is_excluded() {
        let ray = Ray::new(Vec3::default(), Vec3::new(0., 0., -1.));
        let rec = unit_sphere()
            .hit(&ray, 0.75, DefaultType::INFINITY)
            .expect("Far side should still be hit");

        assert_float_eq!(1.5, rec.t, abs <= 1e-12);
        assert!(!rec.front_face);
        // Normal faces back towards the ray origin.
        assert_float_eq!(0., (rec.normal - Vec3::new(0., 0., 1.)).length(), abs <= 1e-12);
    }

    #[test]
    fn upper_bound_is_inclusive() {
        let ray = Ray::new(Vec3::default(), Vec3::new(0., 0., -1.));

        assert!(unit_sphere().hit(&ray, 0., 0.5).is_some());
        assert_eq!(None, unit_sphere().hit(&ray, 0., 0.499));
    }

    #[test]
    fn inside_hits_back_face() {
        let ray = Ray::new(Vec3::new(0., 0., -1.), Vec3::new(0., 1., 0.));
        let rec = unit_sphere()
            .hit(&ray, 0., DefaultType::INFINITY)
            .expect("Ray from the center should hit");

        assert_float_eq!(0.5, rec.t, abs <= 1e-12);
        assert!(!rec.front_face);
        assert_float_eq!(0., (rec.normal - Vec3::new(0., -1., 0.)).length(), abs <= 1e-12);
    }

    #[test]
    fn normal_is_unit_for_unnormalized_direction() {
        let ray = Ray::new(Vec3::default(), Vec3::new(0.1, 0.2, -4.));
        let rec = unit_sphere()
            .hit(&ray, 0., DefaultType::INFINITY)
            .expect("Ray should hit the sphere");

        assert_float_eq!(1., rec.normal.length(), abs <= 1e-12);
        assert_float_eq!(0., (rec.p - ray.at(rec.t)).length(), abs <= 1e-12);
    }
}
