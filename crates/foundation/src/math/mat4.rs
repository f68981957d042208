//! Column-major 4x4 matrices in the layout WGSL expects (`m[col][row]`).

use super::Vec3;

pub type Mat4 = [[f32; 4]; 4];

pub const MAT4_IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Column-major matrix multiply: c = a * b
pub fn mat4_mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut c = [[0.0f32; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            c[col][row] = a[0][row] * b[col][0]
                + a[1][row] * b[col][1]
                + a[2][row] * b[col][2]
                + a[3][row] * b[col][3];
        }
    }
    c
}

/// Right-handed perspective projection with depth range [0, 1].
pub fn mat4_perspective_rh_z0(fov_y_rad: f64, aspect: f64, near: f64, far: f64) -> Mat4 {
    let f = 1.0 / (0.5 * fov_y_rad).tan();
    let m00 = (f / aspect) as f32;
    let m11 = f as f32;
    let m22 = (far / (near - far)) as f32;
    let m23 = ((near * far) / (near - far)) as f32;

    // Column-major form of:
    // [ m00,  0,   0,   0 ]
    // [  0,  m11,  0,   0 ]
    // [  0,   0,  m22, m23 ]
    // [  0,   0,  -1,   0 ]
    [
        [m00, 0.0, 0.0, 0.0],
        [0.0, m11, 0.0, 0.0],
        [0.0, 0.0, m22, -1.0],
        [0.0, 0.0, m23, 0.0],
    ]
}

pub fn mat4_translation(t: Vec3) -> Mat4 {
    let mut m = MAT4_IDENTITY;
    m[3] = [t.x as f32, t.y as f32, t.z as f32, 1.0];
    m
}

pub fn mat4_rotation_x(angle_rad: f64) -> Mat4 {
    let (s, c) = (angle_rad.sin() as f32, angle_rad.cos() as f32);
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

pub fn mat4_rotation_y(angle_rad: f64) -> Mat4 {
    let (s, c) = (angle_rad.sin() as f32, angle_rad.cos() as f32);
    [
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

pub fn mat4_rotation_z(angle_rad: f64) -> Mat4 {
    let (s, c) = (angle_rad.sin() as f32, angle_rad.cos() as f32);
    [
        [c, s, 0.0, 0.0],
        [-s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Translation followed by an XYZ-order Euler rotation (`T * Rx * Ry * Rz`).
pub fn mat4_from_translation_euler(position: Vec3, rotation: Vec3) -> Mat4 {
    let r = mat4_mul(
        mat4_rotation_x(rotation.x),
        mat4_mul(mat4_rotation_y(rotation.y), mat4_rotation_z(rotation.z)),
    );
    mat4_mul(mat4_translation(position), r)
}

pub fn mat4_transform_point(m: Mat4, p: Vec3) -> Vec3 {
    let (x, y, z) = (p.x as f32, p.y as f32, p.z as f32);
    let w = m[0][3] * x + m[1][3] * y + m[2][3] * z + m[3][3];
    let w = if w == 0.0 { 1.0 } else { w };
    Vec3::new(
        ((m[0][0] * x + m[1][0] * y + m[2][0] * z + m[3][0]) / w) as f64,
        ((m[0][1] * x + m[1][1] * y + m[2][1] * z + m[3][1]) / w) as f64,
        ((m[0][2] * x + m[1][2] * y + m[2][2] * z + m[3][2]) / w) as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn identity_is_neutral() {
        let t = mat4_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mat4_mul(MAT4_IDENTITY, t), t);
        assert_eq!(mat4_mul(t, MAT4_IDENTITY), t);
    }

    #[test]
    fn rotation_y_quarter_turn_maps_x_to_negative_z() {
        let m = mat4_rotation_y(std::f64::consts::FRAC_PI_2);
        let p = mat4_transform_point(m, Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(p, Vec3::new(0.0, 0.0, -1.0)), "{p:?}");
    }

    #[test]
    fn rotation_x_quarter_turn_maps_y_to_z() {
        let m = mat4_rotation_x(std::f64::consts::FRAC_PI_2);
        let p = mat4_transform_point(m, Vec3::Y);
        assert!(approx(p, Vec3::new(0.0, 0.0, 1.0)), "{p:?}");
    }

    #[test]
    fn translation_applies_after_rotation() {
        let m = mat4_from_translation_euler(
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(0.0, std::f64::consts::PI, 0.0),
        );
        let p = mat4_transform_point(m, Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(p, Vec3::new(-3.0, 0.0, 0.0)), "{p:?}");
    }

    #[test]
    fn perspective_maps_near_plane_to_zero_depth() {
        let m = mat4_perspective_rh_z0(60f64.to_radians(), 1.0, 0.1, 1000.0);
        let p = mat4_transform_point(m, Vec3::new(0.0, 0.0, -0.1));
        assert!(p.z.abs() < 1e-4, "{p:?}");
        let q = mat4_transform_point(m, Vec3::new(0.0, 0.0, -1000.0));
        assert!((q.z - 1.0).abs() < 1e-3, "{q:?}");
    }
}
