//! nalgebra
//! https://docs.rs/nalgebra/latest/nalgebra/
//!
//! 用法: attitude [yaw pitch roll [m_yaw m_pitch m_roll]]，单位度

use anyhow::{bail, Context, Result};

use attitude::config::*;
use attitude::global_cast::{Quaterniond, Vector3d};
use attitude::utility::Utility;
use attitude::{error_quaternion, to_euler, EulerAngles};

/// 解析三个角度 (度)
fn parse_angles(args: &[String]) -> Result<EulerAngles> {
    let mut angles = [0.0; 3];
    for (angle, arg) in angles.iter_mut().zip(args) {
        *angle = arg
            .parse::<f64>()
            .with_context(|| format!("invalid angle: {:?}", arg))?;
    }
    Ok(EulerAngles::from_degrees(angles[0], angles[1], angles[2]))
}

fn parse_args(args: &[String]) -> Result<(EulerAngles, EulerAngles)> {
    let [sy, sp, sr] = DEFAULT_SETPOINT_DEG;
    let [my, mp, mr] = DEFAULT_MEASURED_DEG;
    match args.len() {
        0 => Ok((
            EulerAngles::from_degrees(sy, sp, sr),
            EulerAngles::from_degrees(my, mp, mr),
        )),
        3 => Ok((
            parse_angles(args)?,
            EulerAngles::from_degrees(my, mp, mr),
        )),
        6 => Ok((parse_angles(&args[..3])?, parse_angles(&args[3..])?)),
        n => bail!("expected 0, 3 or 6 angles, got {}", n),
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LOG_LEVEL)
        .parse_default_env()
        .format_timestamp_nanos()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (setpoint, measured) = parse_args(&args)?;

    let q_r = setpoint.to_quaternion();
    let q_m = measured.to_quaternion();
    log::info!("setpoint: {} -> {}", setpoint, q_r);
    log::info!("measured: {} -> {}", measured, q_m);

    let q_err = error_quaternion(q_m, q_r);
    if !q_err.is_unit(NORM_TOLERANCE) {
        log::warn!("error quaternion is not unit, norm = {}", q_err.norm());
    }
    log::info!("error: {} ({})", q_err, Quaterniond::from(q_err));
    log::info!("error euler: {}", to_euler(&q_err));
    log::debug!(
        "error rotation vector: {}",
        Vector3d(Utility::error_rotation_vector(&q_err))
    );
    Ok(())
}
