//! 欧拉角
//!
//! 航空航天约定：yaw 绕 Z，pitch 绕 Y，roll 绕 X，按 ZYX 顺序内旋。单位为弧度。

use std::fmt::Display;

use crate::quaternion::Quaternion;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerAngles {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl EulerAngles {
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    pub fn from_degrees(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self::new(yaw.to_radians(), pitch.to_radians(), roll.to_radians())
    }

    #[inline]
    pub fn to_quaternion(&self) -> Quaternion {
        to_quaternion(self.yaw, self.pitch, self.roll)
    }
}

impl From<EulerAngles> for Quaternion {
    fn from(angles: EulerAngles) -> Self {
        angles.to_quaternion()
    }
}

impl Display for EulerAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(yaw: {:.3}°, pitch: {:.3}°, roll: {:.3}°)",
            self.yaw.to_degrees(),
            self.pitch.to_degrees(),
            self.roll.to_degrees()
        )
    }
}

/// 欧拉角转四元数
///
/// 对任意实数输入都有定义，角度很大时会损失精度。
pub fn to_quaternion(yaw: f64, pitch: f64, roll: f64) -> Quaternion {
    let (sy, cy) = (yaw * 0.5).sin_cos();
    let (sp, cp) = (pitch * 0.5).sin_cos();
    let (sr, cr) = (roll * 0.5).sin_cos();

    Quaternion {
        w: cr * cp * cy + sr * sp * sy,
        x: sr * cp * cy - cr * sp * sy,
        y: cr * sp * cy + sr * cp * sy,
        z: cr * cp * sy - sr * sp * cy,
    }
}

/// 四元数转欧拉角，[to_quaternion] 的逆
///
/// pitch 的正弦被截断到 [-1, 1]，避免非单位输入产生 NaN。
/// pitch = ±90° 时 yaw 和 roll 不唯一。
pub fn to_euler(q: &Quaternion) -> EulerAngles {
    // roll (x)
    let sinr_cosp = 2.0 * (q.w * q.x + q.y * q.z);
    let cosr_cosp = 1.0 - 2.0 * (q.x * q.x + q.y * q.y);
    let roll = sinr_cosp.atan2(cosr_cosp);

    // pitch (y)
    let sinp = (2.0 * (q.w * q.y - q.z * q.x)).clamp(-1.0, 1.0);
    let pitch = sinp.asin();

    // yaw (z)
    let siny_cosp = 2.0 * (q.w * q.z + q.x * q.y);
    let cosy_cosp = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
    let yaw = siny_cosp.atan2(cosy_cosp);

    EulerAngles { yaw, pitch, roll }
}
