//! 刚体姿态的四元数表示
//!
//! - [euler::to_quaternion]: 欧拉角 (ZYX) 转四元数
//! - [quaternion::k_product]: Hamilton 积
//! - [quaternion::error_quaternion]: 测量姿态到期望姿态的误差四元数
//!
pub mod config;
pub mod euler;
pub mod global_cast;
pub mod quaternion;
pub mod utility;

pub use euler::{to_euler, to_quaternion, EulerAngles};
pub use quaternion::{error_quaternion, k_product, Quaternion};
