#![allow(dead_code)]

/// 单位四元数判定容差
pub const NORM_TOLERANCE: f64 = 1e-9;

/// 默认日志等级，可被 RUST_LOG 覆盖
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// 默认期望姿态 (yaw, pitch, roll)，单位度
pub const DEFAULT_SETPOINT_DEG: [f64; 3] = [90.0, 0.0, 0.0];
/// 默认测量姿态 (yaw, pitch, roll)，单位度
pub const DEFAULT_MEASURED_DEG: [f64; 3] = [0.0, 0.0, 0.0];
