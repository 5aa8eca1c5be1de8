//! Calibración del giroscopio: estimación estadística del bias por eje

use crate::device::{Mpu9250, Mpu9250Error};
use crate::interface::Channel;
use crate::types::{timing, DlpfBandwidth, GyroRange};
use embedded_hal::blocking::delay::DelayMs;

impl<C, D, E> Mpu9250<C, D>
where
    C: Channel<Error = E>,
    D: DelayMs<u32>,
{
    /// Estima el bias del giroscopio promediando muestras con el sensor en
    /// reposo y lo deja aplicado en el estado de control.
    ///
    /// Durante la estimación se fuerza ±250 °/s, DLPF de 20 Hz y SRD 19
    /// para maximizar resolución y estabilidad; al terminar se restaura la
    /// configuración previa. El promedio es incremental y se siembra con el
    /// bias vigente: `bias += (muestra + bias_anterior) / n` por iteración,
    /// acumulando en `f64`. Es la forma documentada del cálculo y se
    /// reproduce tal cual.
    ///
    /// Si falla la configuración antes de muestrear, el bias conserva su
    /// valor anterior.
    pub fn calibrate_gyro(&mut self) -> Result<(), Mpu9250Error> {
        let prev_range = self.state.gyro_range;
        let prev_bandwidth = self.state.bandwidth;
        let prev_srd = self.state.srd;

        self.set_gyro_range(GyroRange::Range250Dps)?;
        self.set_dlpf_bandwidth(DlpfBandwidth::Bw20Hz)?;
        self.set_srd(19)?;

        let n = self.state.num_cal_samples;
        let mut bias = [0f64; 3];
        for _ in 0..n {
            self.read_sample()?;
            bias[0] += (self.gyro_x_rads() + self.state.gyro_bias[0]) as f64 / n as f64;
            bias[1] += (self.gyro_y_rads() + self.state.gyro_bias[1]) as f64 / n as f64;
            bias[2] += (self.gyro_z_rads() + self.state.gyro_bias[2]) as f64 / n as f64;
            self.delay.delay_ms(timing::CAL_SAMPLE_INTERVAL_MS);
        }

        self.state.gyro_bias = [bias[0] as f32, bias[1] as f32, bias[2] as f32];

        // Restaurar la configuración con la que se llamó
        self.set_gyro_range(prev_range)?;
        self.set_dlpf_bandwidth(prev_bandwidth)?;
        self.set_srd(prev_srd)?;

        log::info!(
            "bias del giroscopio: [{:.6}, {:.6}, {:.6}] rad/s",
            self.state.gyro_bias[0],
            self.state.gyro_bias[1],
            self.state.gyro_bias[2]
        );
        Ok(())
    }
}
