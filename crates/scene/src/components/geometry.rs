#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    /// UV sphere centered at the origin.
    Sphere {
        radius: f64,
        width_segments: u32,
        height_segments: u32,
    },
    /// Torus in the XY plane around the Z axis.
    Torus {
        radius: f64,
        tube: f64,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

impl Geometry {
    pub fn sphere(radius: f64, width_segments: u32, height_segments: u32) -> Self {
        Self::Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    pub fn torus(radius: f64, tube: f64, radial_segments: u32, tubular_segments: u32) -> Self {
        Self::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        }
    }

    /// Radius of the smallest origin-centered sphere containing the shape.
    pub fn bounding_radius(&self) -> f64 {
        match *self {
            Geometry::Sphere { radius, .. } => radius,
            Geometry::Torus { radius, tube, .. } => radius + tube,
        }
    }
}
