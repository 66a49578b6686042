use glam::Mat4;
use glam::Quat;
use std::f32::consts;

/// Roll (x), pitch (y) and yaw (z) in radians, applied in yaw-pitch-roll order.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EulerAngles {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl EulerAngles {
    pub fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    pub fn from_degrees(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::new(roll.to_radians(), pitch.to_radians(), yaw.to_radians())
    }

    pub fn to_degrees(self) -> (f32, f32, f32) {
        (self.roll.to_degrees(), self.pitch.to_degrees(), self.yaw.to_degrees())
    }

    pub fn to_quaternion(self) -> Quat {
        let (sy, cy) = (self.yaw * 0.5).sin_cos();
        let (sp, cp) = (self.pitch * 0.5).sin_cos();
        let (sr, cr) = (self.roll * 0.5).sin_cos();

        Quat::from_xyzw(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Inverse of [EulerAngles::to_quaternion]. Pitch saturates at ±π/2 (gimbal lock) instead of producing NaN.
    pub fn from_quaternion(q: Quat) -> Self {
        let sinr_cosp = 2.0 * (q.w * q.x + q.y * q.z);
        let cosr_cosp = 1.0 - 2.0 * (q.x * q.x + q.y * q.y);
        let roll = f32::atan2(sinr_cosp, cosr_cosp);

        let sinp = 2.0 * (q.w * q.y - q.z * q.x);
        let pitch = if sinp.abs() >= 1.0 { consts::FRAC_PI_2.copysign(sinp) } else { sinp.asin() };

        let siny_cosp = 2.0 * (q.w * q.z + q.x * q.y);
        let cosy_cosp = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
        let yaw = f32::atan2(siny_cosp, cosy_cosp);

        Self { roll, pitch, yaw }
    }

    /// Model matrix built from the three elementary rotations.
    pub fn to_matrix(self) -> Mat4 {
        Mat4::from_rotation_z(self.yaw) * Mat4::from_rotation_y(self.pitch) * Mat4::from_rotation_x(self.roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::EulerRot;
    use glam::Vec3;

    const EPSILON: f32 = 1e-4;

    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.dot(b).abs() > 1.0 - EPSILON
    }

    #[test]
    fn quaternion_matches_intrinsic_zyx() {
        let angles = EulerAngles::new(0.3, -0.7, 1.9);
        let expected = Quat::from_euler(EulerRot::ZYX, angles.yaw, angles.pitch, angles.roll);

        assert!(same_rotation(angles.to_quaternion(), expected));
    }

    #[test]
    fn conversion_round_trip() {
        let angles = EulerAngles::from_degrees(20.0, 45.0, -120.0);
        let converted = EulerAngles::from_quaternion(angles.to_quaternion());

        assert!((converted.roll - angles.roll).abs() < EPSILON);
        assert!((converted.pitch - angles.pitch).abs() < EPSILON);
        assert!((converted.yaw - angles.yaw).abs() < EPSILON);
    }

    #[test]
    fn pitch_saturates_at_gimbal_lock() {
        let q = Quat::from_xyzw(0.0, 0.8, 0.0, 0.8);
        let angles = EulerAngles::from_quaternion(q);

        assert_eq!(angles.pitch, consts::FRAC_PI_2);
        assert!(!angles.roll.is_nan() && !angles.yaw.is_nan());
    }

    #[test]
    fn matrix_and_quaternion_rotate_alike() {
        let angles = EulerAngles::new(1.1, 0.4, -0.9);
        let point = Vec3::new(1.0, 2.0, 3.0);

        let by_matrix = angles.to_matrix().transform_point3(point);
        let by_quaternion = angles.to_quaternion() * point;

        assert!((by_matrix - by_quaternion).length() < EPSILON);
    }

    #[test]
    fn degrees_are_converted() {
        let (roll, pitch, yaw) = EulerAngles::from_degrees(90.0, 0.0, 180.0).to_degrees();

        assert!((roll - 90.0).abs() < EPSILON);
        assert_eq!(pitch, 0.0);
        assert!((yaw - 180.0).abs() < EPSILON);
    }
}
