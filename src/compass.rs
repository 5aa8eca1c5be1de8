//! Puente passthrough hacia el magnetómetro AK8963
//!
//! El AK8963 no tiene dirección visible desde el host: cuelga del bus I2C
//! secundario del MPU9250 y todo acceso se releva programando el slot SLV0
//! del master I2C interno. Cada paso del relevo puede fallar por separado,
//! así que cada uno se comprueba y se atribuye individualmente.

use crate::device::{Mpu9250, Mpu9250Error, SlaveStep};
use crate::interface::Channel;
use crate::register::{ak8963, mpu9250};
use crate::types::{bits, timing};
use embedded_hal::blocking::delay::DelayMs;

impl<C, D, E> Mpu9250<C, D>
where
    C: Channel<Error = E>,
    D: DelayMs<u32>,
{
    // Una escritura del slot de relevo, colapsada al paso que representa
    fn slave_write(&mut self, reg: u8, value: u8, step: SlaveStep) -> Result<(), Mpu9250Error> {
        match self.write_register(reg, value) {
            Ok(true) => Ok(()),
            _ => Err(Mpu9250Error::Passthrough(step)),
        }
    }

    /// Lee `count` registros del AK8963 a través del puente.
    ///
    /// Programa el slot de lectura y espera a que el master I2C llene los
    /// registros de staging EXT_SENS_DATA antes de leerlos; la lectura de
    /// staging falla con su `BusError` explícito.
    pub fn read_ak8963_registers(&mut self, reg: u8, count: usize) -> Result<(), Mpu9250Error> {
        self.slave_write(
            mpu9250::I2C_SLV0_ADDR,
            ak8963::I2C_ADDR | bits::I2C_READ_FLAG,
            SlaveStep::Address,
        )?;
        self.slave_write(mpu9250::I2C_SLV0_REG, reg, SlaveStep::Register)?;
        self.slave_write(
            mpu9250::I2C_SLV0_CTRL,
            bits::I2C_SLV0_EN | count as u8,
            SlaveStep::Enable,
        )?;

        // Los registros de staging tardan en llenarse
        self.delay.delay_ms(timing::EXT_DATA_FILL_MS);
        self.read_registers(mpu9250::EXT_SENS_DATA_00, count)
    }

    /// Escribe un registro del AK8963 a través del puente y confirma el
    /// valor releyéndolo
    pub fn write_ak8963_register(&mut self, reg: u8, value: u8) -> Result<(), Mpu9250Error> {
        self.slave_write(mpu9250::I2C_SLV0_ADDR, ak8963::I2C_ADDR, SlaveStep::Address)?;
        self.slave_write(mpu9250::I2C_SLV0_REG, reg, SlaveStep::Register)?;
        self.slave_write(mpu9250::I2C_SLV0_DO, value, SlaveStep::Data)?;
        self.slave_write(
            mpu9250::I2C_SLV0_CTRL,
            bits::I2C_SLV0_EN | 1,
            SlaveStep::Enable,
        )?;

        // Confirmar relevándolo de vuelta
        self.read_ak8963_registers(reg, 1)
            .map_err(|_| Mpu9250Error::Passthrough(SlaveStep::Readback))?;
        if self.state().buffer[0] == value {
            Ok(())
        } else {
            Err(Mpu9250Error::Passthrough(SlaveStep::Verify))
        }
    }

    /// Lee el registro WHO_AM_I del AK8963
    pub fn who_am_i_ak8963(&mut self) -> Result<u8, Mpu9250Error> {
        self.read_ak8963_registers(ak8963::WHO_AM_I, 1)?;
        Ok(self.state().buffer[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{NoopDelay, SimChannel};
    use crate::types::ak_val;

    #[test]
    fn test_write_ak8963_register_relays_through_slv0() {
        let mut dev = Mpu9250::new(SimChannel::new(), NoopDelay);
        dev.write_ak8963_register(ak8963::CNTL1, ak_val::CNT_MEAS2)
            .unwrap();
        assert_eq!(dev.channel.mag[ak8963::CNTL1 as usize], ak_val::CNT_MEAS2);
    }

    #[test]
    fn test_who_am_i_ak8963_reads_through_staging() {
        let mut dev = Mpu9250::new(SimChannel::new(), NoopDelay);
        assert_eq!(dev.who_am_i_ak8963(), Ok(ak_val::WIA_VAL));
    }

    #[test]
    fn test_each_failing_step_is_attributed() {
        // El slot de datos no acepta escrituras: el fallo se atribuye al
        // paso Data, no a un código genérico
        let mut sim = SimChannel::new();
        sim.dead_reg = Some(mpu9250::I2C_SLV0_DO);
        let mut dev = Mpu9250::new(sim, NoopDelay);
        assert_eq!(
            dev.write_ak8963_register(ak8963::CNTL1, ak_val::CNT_MEAS2),
            Err(Mpu9250Error::Passthrough(SlaveStep::Data))
        );

        let mut sim = SimChannel::new();
        sim.dead_reg = Some(mpu9250::I2C_SLV0_ADDR);
        let mut dev = Mpu9250::new(sim, NoopDelay);
        assert_eq!(
            dev.write_ak8963_register(ak8963::CNTL1, ak_val::PWR_DOWN),
            Err(Mpu9250Error::Passthrough(SlaveStep::Address))
        );
    }

    #[test]
    fn test_verify_step_detects_disagreeing_readback() {
        // El magnetómetro ignora la escritura: todos los pasos del relevo
        // funcionan pero la relectura no coincide
        let mut sim = SimChannel::new();
        sim.mag_read_only = true;
        let mut dev = Mpu9250::new(sim, NoopDelay);
        assert_eq!(
            dev.write_ak8963_register(ak8963::CNTL1, ak_val::CNT_MEAS2),
            Err(Mpu9250Error::Passthrough(SlaveStep::Verify))
        );
    }
}
