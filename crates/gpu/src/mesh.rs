use std::f64::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};
use foundation::math::Vec3;
use scene::components::Geometry;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle list, counter-clockwise front faces.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

pub fn build_mesh(geometry: &Geometry) -> MeshData {
    match *geometry {
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        } => uv_sphere(radius, width_segments, height_segments),
        Geometry::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => torus(radius, tube, radial_segments, tubular_segments),
    }
}

/// Latitude/longitude sphere. `u` wraps around Y, `v` runs pole to pole, and
/// the seam column is duplicated so textures wrap cleanly.
pub fn uv_sphere(radius: f64, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let stride = w + 1;

    let mut mesh = MeshData::default();
    mesh.vertices.reserve(((w + 1) * (h + 1)) as usize);

    for iy in 0..=h {
        let v = iy as f64 / h as f64;
        for ix in 0..=w {
            let u = ix as f64 / w as f64;
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();
            let (sin_theta, cos_theta) = (v * PI).sin_cos();
            let normal = Vec3::new(-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            mesh.vertices.push(MeshVertex {
                position: (normal * radius).to_f32(),
                normal: normal.to_f32(),
                uv: [u as f32, 1.0 - v as f32],
            });
        }
    }

    for iy in 0..h {
        for ix in 0..w {
            let a = iy * stride + ix + 1;
            let b = iy * stride + ix;
            let c = (iy + 1) * stride + ix;
            let d = (iy + 1) * stride + ix + 1;
            // Pole rows collapse to a single point; skip their degenerate halves.
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Torus in the XY plane centered on the origin.
pub fn torus(radius: f64, tube: f64, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let stride = tubular + 1;

    let mut mesh = MeshData::default();
    mesh.vertices
        .reserve(((radial + 1) * (tubular + 1)) as usize);

    for j in 0..=radial {
        let v = j as f64 / radial as f64 * TAU;
        for i in 0..=tubular {
            let u = i as f64 / tubular as f64 * TAU;
            let ring = radius + tube * v.cos();
            let position = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices.push(MeshVertex {
                position: position.to_f32(),
                normal: (position - center).normalize().to_f32(),
                uv: [i as f32 / tubular as f32, j as f32 / radial as f32],
            });
        }
    }

    for j in 1..=radial {
        for i in 1..=tubular {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}
