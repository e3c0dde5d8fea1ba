//! Hit-testing protocol shared by every primitive and by the [Scene](crate::scene::Scene).

use std::fmt::Debug;

use dyn_clone::DynClone;

use crate::{
    raycasting::{HitRecord, Ray},
    DefaultType,
};

/// Anything a [Ray] can intersect.
pub trait Hittable: DynClone + Debug {
    /// Check for intersection with `ray`.
    ///
    /// Only hits whose parameter lies in `(t_min, t_max]` are reported. The exclusive lower bound
    /// keeps a ray from re-hitting the surface it starts on, the upper bound lets callers prune
    /// against the nearest hit found so far.
    fn hit(&self, ray: &Ray, t_min: DefaultType, t_max: DefaultType) -> Option<HitRecord>;
}

dyn_clone::clone_trait_object!(Hittable);

/// `t_min < t <= t_max`
#[inline]
pub fn in_range(t: DefaultType, t_min: DefaultType, t_max: DefaultType) -> bool {
    t_min < t && t <= t_max
}
