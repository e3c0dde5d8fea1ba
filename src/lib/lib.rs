#![warn(missing_docs)]

//! Library used by the eray-rtiow renderer. Provides the vector algebra, ray/hit-testing protocol,
//! sphere primitive, scene collection, shading and the scanline engine needed to render a
//! normal-shaded scene to a PPM raster.

pub mod camera;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod hittable;
pub mod image;
pub mod primitives;
pub mod raycasting;
pub mod scene;
pub mod shader;
pub mod vector;

/// Scalar type used by every vector component and ray parameter.
pub type DefaultType = f64;

/// Dimensionality of a [vector::Vector] when left unspecified.
pub const DEFAULT_DIM: usize = 3;

/// Commonly used items, for `use eray_rtiow::prelude::*`.
pub mod prelude {
    pub use crate::{
        camera::Camera,
        color::{Color, Rgb8},
        config::{CameraConfig, RenderConfig},
        engine::Engine,
        error::{Error, Result},
        hittable::Hittable,
        image::{Image, PixelSink, PpmFormat, PpmWriter},
        primitives::Sphere,
        raycasting::{HitRecord, Ray},
        scene::Scene,
        shader::ray_color,
        vector::{Point3, Vec3, Vector},
    };
}
