//! 全局类型转换
//!
//! 用于将 [Quaternion] 与 nalgebra 的类型互相转换
//!

use nalgebra::{UnitQuaternion, Vector3};
use std::fmt::Display;

use crate::quaternion::Quaternion;

/// [Quaternion] 转 [nalgebra::Quaternion]，分量原样保留
impl From<Quaternion> for nalgebra::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl From<nalgebra::Quaternion<f64>> for Quaternion {
    fn from(q: nalgebra::Quaternion<f64>) -> Self {
        Quaternion::new(q.w, q.i, q.j, q.k)
    }
}

/// [Quaternion] 转 [UnitQuaternion]，会归一化
impl From<Quaternion> for UnitQuaternion<f64> {
    fn from(q: Quaternion) -> Self {
        UnitQuaternion::from_quaternion(q.into())
    }
}

impl From<UnitQuaternion<f64>> for Quaternion {
    fn from(q: UnitQuaternion<f64>) -> Self {
        q.into_inner().into()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Quaterniond(pub UnitQuaternion<f64>);

/// 打印为轴角形式
impl Display for Quaterniond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.axis() {
            Some(axis) => write!(
                f,
                "{:.3}° about [{:.4}, {:.4}, {:.4}]",
                self.0.angle().to_degrees(),
                axis.x,
                axis.y,
                axis.z
            ),
            None => write!(f, "0.000°"),
        }
    }
}

impl From<Quaternion> for Quaterniond {
    fn from(q: Quaternion) -> Self {
        Quaterniond(q.into())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Vector3d(pub Vector3<f64>);

impl Display for Vector3d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.5}, {:.5}, {:.5}]", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::euler::to_quaternion;
    use crate::quaternion::k_product;

    #[test]
    fn test_matches_nalgebra_euler() {
        let cases = [
            (0.0, 0.0, 0.0),
            (std::f64::consts::FRAC_PI_2, 0.0, 0.0),
            (0.4, -0.7, 1.9),
            (-2.2, 1.1, -0.3),
        ];
        for (yaw, pitch, roll) in cases {
            let ours = to_quaternion(yaw, pitch, roll);
            let theirs: Quaternion = UnitQuaternion::from_euler_angles(roll, pitch, yaw).into();
            assert!(ours.approx_eq(&theirs, 1e-12), "{} != {}", ours, theirs);
        }
    }

    #[test]
    fn test_matches_nalgebra_product() {
        let a = Quaternion::new(0.3, -1.0, 2.0, 0.5);
        let b = Quaternion::new(-0.7, 0.2, 0.9, -1.5);
        let ours = k_product(a, b);
        let na: nalgebra::Quaternion<f64> = a.into();
        let nb: nalgebra::Quaternion<f64> = b.into();
        let theirs: Quaternion = (na * nb).into();
        assert!(ours.approx_eq(&theirs, 1e-12), "{} != {}", ours, theirs);
    }

    #[test]
    fn test_unit_cast_normalizes() {
        let q = Quaternion::new(2.0, 0.0, 0.0, 0.0);
        let unit: UnitQuaternion<f64> = q.into();
        let back: Quaternion = unit.into();
        assert_eq!(back, Quaternion::identity());
    }

    #[test]
    fn test_display() {
        let q = to_quaternion(std::f64::consts::FRAC_PI_2, 0.0, 0.0);
        let printed = Quaterniond::from(q).to_string();
        println!("q = {}", printed);
        assert!(printed.starts_with("90.000°"));
        assert_eq!(Quaterniond::default().to_string(), "0.000°");
        assert_eq!(
            Vector3d(Vector3::new(1.0, 0.0, -0.5)).to_string(),
            "[1.00000, 0.00000, -0.50000]"
        );
    }
}
