//! Collection of objects representing a scene to be rendered.

use crate::{
    hittable::Hittable,
    raycasting::{HitRecord, Ray},
    DefaultType,
};

#[derive(Clone, Debug, Default)]
/// Ordered list of [Hittable] objects, itself [Hittable].
///
/// The scene owns its objects. Iteration follows insertion order, but the reported hit is always
/// the nearest one regardless of that order.
pub struct Scene {
    /// Objects currently in the scene.
    pub objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object to the scene.
    pub fn add_object(&mut self, object: impl Hittable + 'static) -> &mut Self {
        self.objects.push(Box::new(object));
        self
    }

    /// Removes every object from the scene.
    pub fn clear(&mut self) -> &mut Self {
        self.objects.clear();
        self
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, t_min: DefaultType, t_max: DefaultType) -> Option<HitRecord> {
        // Each object only competes against the closest hit found so far.
        self.objects.iter().fold(None, |closest, object| {
            let closest_so_far = closest.as_ref().map_or(t_max, |rec: &HitRecord| rec.t);
            object.hit(ray, t_min, closest_so_far).or(closest)
        })
    }
}
