//! Funciones de conversión para datos del sensor MPU9250
//!
//! Este módulo proporciona los factores de escala que convierten counts
//! crudos del sensor a unidades físicas: m/s² para el acelerómetro, rad/s
//! para el giroscopio y µT para el magnetómetro.

use crate::types::physics::{DEG_TO_RAD, GRAVITY_MSS};
use crate::types::{AccelRange, GyroRange};

/// Factor de escala del acelerómetro (m/s² por count) para la escala
/// completa configurada
pub fn accel_scale_mss(range: AccelRange) -> f32 {
    GRAVITY_MSS * range.range_g() / 32767.5
}

/// Factor de escala del giroscopio (rad/s por count) para la escala
/// completa configurada
pub fn gyro_scale_rads(range: GyroRange) -> f32 {
    range.range_dps() / 32767.5 * DEG_TO_RAD
}

/// Factor de escala del magnetómetro (µT por count) a partir del byte de
/// ajuste de sensibilidad de fábrica (ASA)
pub fn mag_scale_ut(asa: u8) -> f32 {
    ((asa as f32 - 128.0) / 256.0 + 1.0) * 4912.0 / 32760.0
}
