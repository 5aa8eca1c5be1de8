//! Definiciones de registros para el MPU9250 y el magnetómetro AK8963
//!
//! Solo direcciones; los valores de configuración de cada registro viven en
//! `types::bits` y `types::ak_val`.

/// Registros del MPU9250 (sensor primario)
pub mod mpu9250 {
    /// Dirección I2C estándar del MPU9250
    pub const I2C_ADDR: u8 = 0x68;

    // Registros de identificación
    pub const WHO_AM_I: u8 = 0x75;

    // Registros de datos
    pub const ACCEL_OUT: u8 = 0x3B;
    pub const TEMP_OUT: u8 = 0x41;
    pub const GYRO_OUT: u8 = 0x43;
    pub const EXT_SENS_DATA_00: u8 = 0x49;

    // Registros de configuración de sensores
    pub const CONFIG: u8 = 0x1A;
    pub const GYRO_CONFIG: u8 = 0x1B;
    pub const ACCEL_CONFIG: u8 = 0x1C;
    pub const ACCEL_CONFIG2: u8 = 0x1D;
    pub const SMPDIV: u8 = 0x19;
    pub const LP_ACCEL_ODR: u8 = 0x1E;
    pub const WOM_THR: u8 = 0x1F;

    // Registros de interrupciones
    pub const INT_PIN_CFG: u8 = 0x37;
    pub const INT_ENABLE: u8 = 0x38;
    pub const MOT_DETECT_CTRL: u8 = 0x69;

    // Registros de energía y control
    pub const PWR_MGMNT_1: u8 = 0x6B;
    pub const PWR_MGMNT_2: u8 = 0x6C;
    pub const USER_CTRL: u8 = 0x6A;

    // Registros del master I2C interno (canal secundario)
    pub const I2C_MST_CTRL: u8 = 0x24;
    pub const I2C_SLV0_ADDR: u8 = 0x25;
    pub const I2C_SLV0_REG: u8 = 0x26;
    pub const I2C_SLV0_CTRL: u8 = 0x27;
    pub const I2C_SLV0_DO: u8 = 0x63;

    // Registros de FIFO
    pub const FIFO_EN: u8 = 0x23;
    pub const FIFO_COUNT: u8 = 0x72;
    pub const FIFO_READ: u8 = 0x74;
}

/// Registros del magnetómetro AK8963 (detrás del master I2C del MPU9250)
pub mod ak8963 {
    /// Dirección del AK8963 en el bus I2C secundario
    pub const I2C_ADDR: u8 = 0x0C;

    pub const WHO_AM_I: u8 = 0x00;
    /// Inicio de los datos medidos (HXL..HZH, little-endian)
    pub const HXL: u8 = 0x03;
    pub const CNTL1: u8 = 0x0A;
    pub const CNTL2: u8 = 0x0B;
    /// Registros de ajuste de sensibilidad de fábrica (ASAX/ASAY/ASAZ)
    pub const ASA: u8 = 0x10;
}
