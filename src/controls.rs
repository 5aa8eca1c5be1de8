//! Controles básicos de configuración del MPU9250: escalas, ancho de banda
//! del DLPF y divisor de tasa de muestreo

use crate::device::{Mpu9250, Mpu9250Error};
use crate::interface::Channel;
use crate::register::{ak8963, mpu9250};
use crate::types::{ak_val, timing, AccelRange, DlpfBandwidth, GyroRange};
use embedded_hal::blocking::delay::DelayMs;

impl<C, D, E> Mpu9250<C, D>
where
    C: Channel<Error = E>,
    D: DelayMs<u32>,
{
    /// Configura la escala completa del acelerómetro y registra el factor de
    /// conversión correspondiente
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Mpu9250Error> {
        self.write_verified(mpu9250::ACCEL_CONFIG, range.fs_sel())?;
        self.state.accel_scale = crate::conversion::accel_scale_mss(range);
        self.state.accel_range = range;
        Ok(())
    }

    /// Configura la escala completa del giroscopio y registra el factor de
    /// conversión correspondiente
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Mpu9250Error> {
        self.write_verified(mpu9250::GYRO_CONFIG, range.fs_sel())?;
        self.state.gyro_scale = crate::conversion::gyro_scale_rads(range);
        self.state.gyro_range = range;
        Ok(())
    }

    /// Configura el ancho de banda del filtro paso bajo digital para
    /// acelerómetro y giroscopio
    pub fn set_dlpf_bandwidth(&mut self, bandwidth: DlpfBandwidth) -> Result<(), Mpu9250Error> {
        self.write_verified(mpu9250::ACCEL_CONFIG2, bandwidth.accel_config())?;
        self.write_verified(mpu9250::CONFIG, bandwidth.gyro_config())?;
        self.state.bandwidth = bandwidth;
        Ok(())
    }

    /// Configura el divisor de tasa de muestreo (SRD).
    ///
    /// El AK8963 no puede seguir la tasa alta del sensor primario, así que el
    /// cambio se hace con el divisor temporalmente a 19 mientras se reajusta
    /// el modo del magnetómetro: 8 Hz para srd > 9, 100 Hz en caso contrario.
    pub fn set_srd(&mut self, srd: u8) -> Result<(), Mpu9250Error> {
        // Divisor a 19 para facilitar la reconfiguración del magnetómetro
        self.write_verified(mpu9250::SMPDIV, 19)?;

        let mag_mode = if srd > 9 {
            ak_val::CNT_MEAS1
        } else {
            ak_val::CNT_MEAS2
        };
        self.write_ak8963_register(ak8963::CNTL1, ak_val::PWR_DOWN)?;
        self.delay.delay_ms(timing::MAG_MODE_CHANGE_MS);
        self.write_ak8963_register(ak8963::CNTL1, mag_mode)?;
        self.delay.delay_ms(timing::MAG_MODE_CHANGE_MS);

        // Re-armar el relevo continuo de los 7 bytes de datos del AK8963
        self.read_ak8963_registers(ak8963::HXL, 7)?;

        // Divisor definitivo
        self.write_verified(mpu9250::SMPDIV, srd)?;
        self.state.srd = srd;
        Ok(())
    }
}
