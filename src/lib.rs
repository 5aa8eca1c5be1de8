//! Biblioteca Rust para el sensor de movimiento InvenSense MPU9250
//!
//! Esta biblioteca proporciona una interfaz para controlar el sensor MPU9250,
//! un IMU de 9 ejes con giroscopio, acelerómetro y magnetómetro AK8963
//! accesible a través del master I2C interno del chip.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Read, Write};

// Importaciones internas
pub mod calibration;
pub mod compass;
pub mod controls;
pub mod conversion;
pub mod device;
pub mod interface;
pub mod register;
pub mod types;

#[cfg(test)]
mod testutil;

// Re-exports públicos
pub use device::{BusError, ControlState, InitStep, Mpu9250, Mpu9250Error, SlaveStep};
pub use interface::I2cChannel;
pub use types::{AccelRange, AxisMap, DlpfBandwidth, GyroRange, ImuSample};

/// Crea un nuevo dispositivo MPU9250 usando el bus I2C
pub fn new_i2c_device<I, D, E>(i2c: I, address: u8, delay: D) -> Mpu9250<I2cChannel<I>, D>
where
    I: Read<Error = E> + Write<Error = E>,
    D: DelayMs<u32>,
{
    let channel = I2cChannel::new(i2c, address);
    Mpu9250::new(channel, delay)
}

/// Crea un dispositivo MPU9250 sobre un bus I2C de Linux (`/dev/i2c-*`)
#[cfg(feature = "linux")]
pub fn new_linux_device(
    path: &str,
    address: u8,
) -> Result<
    Mpu9250<I2cChannel<linux_embedded_hal::I2cdev>, linux_embedded_hal::Delay>,
    linux_embedded_hal::i2cdev::linux::LinuxI2CError,
> {
    let i2c = linux_embedded_hal::I2cdev::new(path)?;
    Ok(new_i2c_device(i2c, address, linux_embedded_hal::Delay))
}
