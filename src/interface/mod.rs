//! Módulo de abstracción para el canal de comunicación con el MPU9250
//!
//! El sensor se ve como un canal de bytes bidireccional: una escritura de un
//! byte selecciona el registro y la lectura siguiente devuelve su contenido.
//! El driver construye sus transacciones de registro sobre estas dos
//! primitivas.

use embedded_hal::blocking::i2c;

/// Trait para abstraer el canal de comunicación con el sensor
pub trait Channel {
    /// Tipo de error que puede producir el canal
    type Error;

    /// Escribe bytes crudos en el canal
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Lee bytes crudos del canal
    fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

/// Implementación de Channel sobre un bus I2C
pub struct I2cChannel<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C, E> I2cChannel<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::Read<Error = E>,
{
    /// Crea un nuevo canal I2C hacia la dirección indicada
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Consume el canal y devuelve el dispositivo I2C subyacente
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Channel for I2cChannel<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::Read<Error = E>,
{
    type Error = E;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.addr, bytes)
    }

    fn read_bytes(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(self.addr, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::mpu9250;
    use crate::testutil::NoopDelay;

    // Bus I2C bloqueante mínimo: un fichero de registros plano
    struct MemBus {
        regs: [u8; 256],
        ptr: u8,
    }

    impl i2c::Write for MemBus {
        type Error = ();

        fn write(&mut self, _addr: u8, bytes: &[u8]) -> Result<(), Self::Error> {
            match *bytes {
                [reg] => self.ptr = reg,
                [reg, value] => {
                    self.regs[reg as usize] = value;
                    self.ptr = reg;
                }
                _ => return Err(()),
            }
            Ok(())
        }
    }

    impl i2c::Read for MemBus {
        type Error = ();

        fn read(&mut self, _addr: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
            let start = self.ptr as usize;
            buffer.copy_from_slice(&self.regs[start..start + buffer.len()]);
            Ok(())
        }
    }

    #[test]
    fn test_new_i2c_device_over_blocking_bus() {
        // El constructor debe aceptar cualquier bus cuyos traits Read y
        // Write compartan el tipo de error
        let mut bus = MemBus {
            regs: [0; 256],
            ptr: 0,
        };
        bus.regs[mpu9250::WHO_AM_I as usize] = 113;

        let mut dev = crate::new_i2c_device(bus, mpu9250::I2C_ADDR, NoopDelay);
        assert_eq!(dev.who_am_i(), Ok(113));
    }
}
