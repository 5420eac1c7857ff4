//! 四元数
//!
//! 姿态的四元数表示，以及测量姿态与期望姿态之间的误差四元数。
//!
//! 约定：标量在前 `(w, x, y, z)`，乘法为 Hamilton 积。
//!

use std::fmt::Display;
use std::ops::{Mul, Neg};

/// 姿态四元数，不强制单位长度。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// 单位四元数 (1, 0, 0, 0)，即无旋转
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    #[inline]
    pub fn dot(&self, other: &Quaternion) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// 返回归一化后的副本。零四元数原样返回。
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return *self;
        }
        Self::new(self.w / n, self.x / n, self.y / n, self.z / n)
    }

    pub fn is_unit(&self, tol: f64) -> bool {
        (self.norm() - 1.0).abs() <= tol
    }

    /// 逐分量比较，不把 q 和 -q 视为相等
    pub fn approx_eq(&self, other: &Quaternion, tol: f64) -> bool {
        (self.w - other.w).abs() <= tol
            && (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }
}

/// Hamilton 积 `q_m ⊗ q_r`，`q_m` 为左操作数。
///
/// - `q_m`: 测量姿态
/// - `q_r`: 期望姿态
pub fn k_product(q_m: Quaternion, q_r: Quaternion) -> Quaternion {
    Quaternion {
        w: q_m.w * q_r.w - q_m.x * q_r.x - q_m.y * q_r.y - q_m.z * q_r.z,
        x: q_m.w * q_r.x + q_m.x * q_r.w + q_m.y * q_r.z - q_m.z * q_r.y,
        y: q_m.w * q_r.y - q_m.x * q_r.z + q_m.y * q_r.w + q_m.z * q_r.x,
        z: q_m.w * q_r.z + q_m.x * q_r.y - q_m.y * q_r.x + q_m.z * q_r.w,
    }
}

/// 误差四元数 `conj(q_m) ⊗ q_r`
///
/// 在机体系下从测量姿态旋转到期望姿态所需的旋转，满足 `q_m ⊗ q_err = q_r`。
/// 两者相同时结果为单位四元数。
pub fn error_quaternion(q_m: Quaternion, q_r: Quaternion) -> Quaternion {
    k_product(q_m.conjugate(), q_r)
}

impl Mul for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        k_product(self, rhs)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn neg(self) -> Quaternion {
        Quaternion::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Display for Quaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(w: {:.5}, x: {:.5}, y: {:.5}, z: {:.5})",
            self.w, self.x, self.y, self.z
        )
    }
}
