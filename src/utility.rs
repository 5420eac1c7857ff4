use crate::quaternion::Quaternion;

pub struct Utility {}

impl Utility {
    /// 小角度旋转向量转四元数（一阶近似后归一化）
    #[inline]
    pub fn delta_quat(theta: nalgebra::Vector3<f64>) -> Quaternion {
        let half_theta = theta / 2.0;
        Quaternion::new(1.0, half_theta.x, half_theta.y, half_theta.z).normalize()
    }

    /// 误差四元数的小角度旋转向量 `2 * sign(w) * (x, y, z)`
    ///
    /// 取 w >= 0 的半球，保证走较短的一边。
    #[inline]
    pub fn error_rotation_vector(q_err: &Quaternion) -> nalgebra::Vector3<f64> {
        let sign = if q_err.w < 0.0 { -1.0 } else { 1.0 };
        nalgebra::Vector3::new(q_err.x, q_err.y, q_err.z) * (2.0 * sign)
    }
}

#[cfg(test)]
mod tests {
    use super::Utility;
    use crate::euler::to_quaternion;
    use crate::quaternion::{error_quaternion, Quaternion};

    #[test]
    fn test_delta_quat_small_angle() {
        let theta = nalgebra::Vector3::new(1e-4, -2e-4, 3e-4);
        let dq = Utility::delta_quat(theta);
        let exact = to_quaternion(3e-4, -2e-4, 1e-4);
        assert!(dq.approx_eq(&exact, 1e-7), "{} != {}", dq, exact);
        assert!(dq.is_unit(1e-12));
    }

    #[test]
    fn test_error_rotation_vector() {
        let q_m = Quaternion::identity();
        let q_r = to_quaternion(0.01, 0.0, 0.0);
        let v = Utility::error_rotation_vector(&error_quaternion(q_m, q_r));
        assert!(v.x.abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
        assert!((v.z - 0.01).abs() < 1e-6);

        // q 与 -q 表示同一旋转
        let v_neg = Utility::error_rotation_vector(&-error_quaternion(q_m, q_r));
        assert!((v - v_neg).norm() < 1e-15);
    }
}
