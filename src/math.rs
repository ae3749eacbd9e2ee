/// Applies a 3x3 rotation matrix to a point
pub fn multiply_matrix_vector(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    matrix.map(|row| row[0] * vector[0] + row[1] * vector[1] + row[2] * vector[2])
}

/// Globe orientation: yaw about Y first, then pitch about X.
///
/// Expanded form of `Rx(pitch) * Ry(yaw)`.
pub fn globe_rotation(yaw: f64, pitch: f64) -> [[f64; 3]; 3] {
    let (sin_y, cos_y) = yaw.sin_cos();
    let (sin_p, cos_p) = pitch.sin_cos();
    [
        [cos_y, 0.0, sin_y],
        [sin_p * sin_y, cos_p, -sin_p * cos_y],
        [-cos_p * sin_y, sin_p, cos_p * cos_y],
    ]
}

/// Perspective camera looking down -Z from `(0, 0, distance)`
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub distance: f64,
    /// Vertical field of view in radians
    pub fov_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            distance: 3.3,
            fov_y: 45f64.to_radians(),
        }
    }
}

impl Camera {
    /// Projects a world point to normalized coordinates, `[-1, 1]` on the
    /// shorter screen side, with +y pointing up.
    pub fn project(&self, point: &[f64; 3]) -> [f64; 2] {
        let focal = 1.0 / (self.fov_y * 0.5).tan();
        let depth = (self.distance - point[2]).max(1e-6);
        [point[0] * focal / depth, point[1] * focal / depth]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation_x(angle: f64) -> [[f64; 3]; 3] {
        let (sin, cos) = angle.sin_cos();
        [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]]
    }

    fn rotation_y(angle: f64) -> [[f64; 3]; 3] {
        let (sin, cos) = angle.sin_cos();
        [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]]
    }

    #[test]
    fn zero_rotation_is_identity() {
        let p = [0.3, -0.4, 0.5];
        let r = multiply_matrix_vector(&globe_rotation(0.0, 0.0), &p);
        for i in 0..3 {
            assert!((r[i] - p[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn yaw_turns_front_to_side() {
        let front = [0.0, 0.0, 1.0];
        let r = multiply_matrix_vector(&globe_rotation(std::f64::consts::FRAC_PI_2, 0.0), &front);
        assert!((r[0] - 1.0).abs() < 1e-12);
        assert!(r[2].abs() < 1e-12);
    }

    #[test]
    fn pitch_applies_after_yaw() {
        for p in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.2, -0.5, 0.8]] {
            let combined = multiply_matrix_vector(&globe_rotation(0.7, 0.3), &p);
            let stepwise = multiply_matrix_vector(
                &rotation_x(0.3),
                &multiply_matrix_vector(&rotation_y(0.7), &p),
            );
            for i in 0..3 {
                assert!((combined[i] - stepwise[i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn projection_centers_origin_and_keeps_globe_in_view() {
        let camera = Camera::default();
        assert_eq!(camera.project(&[0.0, 0.0, 0.0]), [0.0, 0.0]);
        let edge = camera.project(&[1.0, 0.0, 0.0]);
        assert!(edge[0] > 0.5 && edge[0] < 1.0);
        let top = camera.project(&[0.0, 1.0, 0.0]);
        assert!(top[1] > 0.5);
    }
}
