//! Simulador del fichero de registros del MPU9250 para las pruebas.
//!
//! Emula el canal de comunicación a nivel de registro: una escritura de un
//! byte fija el puntero de lectura, una de dos bytes escribe un registro.
//! El slot SLV0 del master I2C se emula relevando lecturas y escrituras
//! hacia un banco de registros AK8963 separado, igual que hace el chip.

use crate::interface::Channel;
use crate::register::{ak8963, mpu9250};
use embedded_hal::blocking::delay::DelayMs;

/// Error del canal simulado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimError;

pub struct SimChannel {
    /// Registros del MPU9250
    pub regs: [u8; 256],
    /// Registros del AK8963 (solo visibles a través del relevo)
    pub mag: [u8; 256],
    /// Puntero de registro fijado por la última escritura de dirección
    pub ptr: u8,
    /// Registro primario que ignora escrituras (simula "no aceptada")
    pub dead_reg: Option<u8>,
    /// El AK8963 ignora las escrituras relevadas
    pub mag_read_only: bool,
    /// Todas las lecturas fallan
    pub fail_reads: bool,
    /// Las lecturas fallan a partir de la n-ésima
    pub fail_reads_after: Option<u32>,
    reads_seen: u32,
}

impl SimChannel {
    pub fn new() -> Self {
        let mut sim = Self {
            regs: [0; 256],
            mag: [0; 256],
            ptr: 0,
            dead_reg: None,
            mag_read_only: false,
            fail_reads: false,
            fail_reads_after: None,
            reads_seen: 0,
        };
        sim.regs[mpu9250::WHO_AM_I as usize] = 113;
        sim.mag[ak8963::WHO_AM_I as usize] = 0x48;
        // Ajuste de sensibilidad de fábrica neutro
        sim.mag[ak8963::ASA as usize] = 128;
        sim.mag[ak8963::ASA as usize + 1] = 128;
        sim.mag[ak8963::ASA as usize + 2] = 128;
        sim
    }

    // Transferencia SLV0 al habilitar el slot, como la haría el master I2C
    fn run_slave_transfer(&mut self, ctrl: u8) {
        let len = (ctrl & 0x0F) as usize;
        let addr = self.regs[mpu9250::I2C_SLV0_ADDR as usize];
        let target = self.regs[mpu9250::I2C_SLV0_REG as usize] as usize;

        if addr & 0x80 != 0 {
            // Lectura: copiar del AK8963 a los registros de staging
            for i in 0..len {
                self.regs[mpu9250::EXT_SENS_DATA_00 as usize + i] = self.mag[target + i];
            }
        } else if !self.mag_read_only {
            // Escritura de un byte desde el slot de datos
            self.mag[target] = self.regs[mpu9250::I2C_SLV0_DO as usize];
        }
    }
}

impl Channel for SimChannel {
    type Error = SimError;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        match *bytes {
            [reg] => self.ptr = reg,
            [reg, value] => {
                if self.dead_reg == Some(reg) {
                    return Ok(());
                }
                self.regs[reg as usize] = value;
                if reg == mpu9250::I2C_SLV0_CTRL && value & 0x80 != 0 {
                    self.run_slave_transfer(value);
                }
            }
            _ => return Err(SimError),
        }
        Ok(())
    }

    fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail_reads {
            return Err(SimError);
        }
        self.reads_seen += 1;
        if let Some(limit) = self.fail_reads_after {
            if self.reads_seen > limit {
                return Err(SimError);
            }
        }
        let start = self.ptr as usize;
        buffer.copy_from_slice(&self.regs[start..start + buffer.len()]);
        Ok(())
    }
}

/// Delay que no espera: los tiempos de asentamiento no aplican al simulador
pub struct NoopDelay;

impl DelayMs<u32> for NoopDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}
