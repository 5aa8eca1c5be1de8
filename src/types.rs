//! Definiciones de tipos y constantes comunes para el MPU9250

/// Escalas completas disponibles para el acelerómetro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelRange {
    /// ±2g
    Range2G,
    /// ±4g
    Range4G,
    /// ±8g
    Range8G,
    /// ±16g
    Range16G,
}

impl Default for AccelRange {
    fn default() -> Self {
        AccelRange::Range16G
    }
}

impl AccelRange {
    /// Valor FS_SEL para el registro ACCEL_CONFIG
    pub fn fs_sel(&self) -> u8 {
        match self {
            AccelRange::Range2G => bits::ACCEL_FS_SEL_2G,
            AccelRange::Range4G => bits::ACCEL_FS_SEL_4G,
            AccelRange::Range8G => bits::ACCEL_FS_SEL_8G,
            AccelRange::Range16G => bits::ACCEL_FS_SEL_16G,
        }
    }

    /// Rango en g
    pub fn range_g(&self) -> f32 {
        match self {
            AccelRange::Range2G => 2.0,
            AccelRange::Range4G => 4.0,
            AccelRange::Range8G => 8.0,
            AccelRange::Range16G => 16.0,
        }
    }
}

/// Escalas completas disponibles para el giroscopio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroRange {
    /// ±250°/s
    Range250Dps,
    /// ±500°/s
    Range500Dps,
    /// ±1000°/s
    Range1000Dps,
    /// ±2000°/s
    Range2000Dps,
}

impl Default for GyroRange {
    fn default() -> Self {
        GyroRange::Range2000Dps
    }
}

impl GyroRange {
    /// Valor FS_SEL para el registro GYRO_CONFIG
    pub fn fs_sel(&self) -> u8 {
        match self {
            GyroRange::Range250Dps => bits::GYRO_FS_SEL_250DPS,
            GyroRange::Range500Dps => bits::GYRO_FS_SEL_500DPS,
            GyroRange::Range1000Dps => bits::GYRO_FS_SEL_1000DPS,
            GyroRange::Range2000Dps => bits::GYRO_FS_SEL_2000DPS,
        }
    }

    /// Rango en grados/segundo
    pub fn range_dps(&self) -> f32 {
        match self {
            GyroRange::Range250Dps => 250.0,
            GyroRange::Range500Dps => 500.0,
            GyroRange::Range1000Dps => 1000.0,
            GyroRange::Range2000Dps => 2000.0,
        }
    }
}

/// Anchos de banda del filtro paso bajo digital (DLPF), comunes a
/// acelerómetro y giroscopio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DlpfBandwidth {
    /// 184 Hz
    Bw184Hz,
    /// 92 Hz
    Bw92Hz,
    /// 41 Hz
    Bw41Hz,
    /// 20 Hz
    Bw20Hz,
    /// 10 Hz
    Bw10Hz,
    /// 5 Hz
    Bw5Hz,
}

impl Default for DlpfBandwidth {
    fn default() -> Self {
        DlpfBandwidth::Bw184Hz
    }
}

impl DlpfBandwidth {
    /// Valor para el registro ACCEL_CONFIG2
    pub fn accel_config(&self) -> u8 {
        match self {
            DlpfBandwidth::Bw184Hz => bits::ACCEL_DLPF_184,
            DlpfBandwidth::Bw92Hz => bits::ACCEL_DLPF_92,
            DlpfBandwidth::Bw41Hz => bits::ACCEL_DLPF_41,
            DlpfBandwidth::Bw20Hz => bits::ACCEL_DLPF_20,
            DlpfBandwidth::Bw10Hz => bits::ACCEL_DLPF_10,
            DlpfBandwidth::Bw5Hz => bits::ACCEL_DLPF_5,
        }
    }

    /// Valor para el registro CONFIG (lado giroscopio)
    pub fn gyro_config(&self) -> u8 {
        match self {
            DlpfBandwidth::Bw184Hz => bits::GYRO_DLPF_184,
            DlpfBandwidth::Bw92Hz => bits::GYRO_DLPF_92,
            DlpfBandwidth::Bw41Hz => bits::GYRO_DLPF_41,
            DlpfBandwidth::Bw20Hz => bits::GYRO_DLPF_20,
            DlpfBandwidth::Bw10Hz => bits::GYRO_DLPF_10,
            DlpfBandwidth::Bw5Hz => bits::GYRO_DLPF_5,
        }
    }
}

/// Valores de configuración para los registros del MPU9250
pub mod bits {
    // ACCEL_CONFIG
    pub const ACCEL_FS_SEL_2G: u8 = 0x00;
    pub const ACCEL_FS_SEL_4G: u8 = 0x08;
    pub const ACCEL_FS_SEL_8G: u8 = 0x10;
    pub const ACCEL_FS_SEL_16G: u8 = 0x18;

    // GYRO_CONFIG
    pub const GYRO_FS_SEL_250DPS: u8 = 0x00;
    pub const GYRO_FS_SEL_500DPS: u8 = 0x08;
    pub const GYRO_FS_SEL_1000DPS: u8 = 0x10;
    pub const GYRO_FS_SEL_2000DPS: u8 = 0x18;

    // ACCEL_CONFIG2
    pub const ACCEL_DLPF_184: u8 = 0x01;
    pub const ACCEL_DLPF_92: u8 = 0x02;
    pub const ACCEL_DLPF_41: u8 = 0x03;
    pub const ACCEL_DLPF_20: u8 = 0x04;
    pub const ACCEL_DLPF_10: u8 = 0x05;
    pub const ACCEL_DLPF_5: u8 = 0x06;

    // CONFIG (DLPF del giroscopio)
    pub const GYRO_DLPF_184: u8 = 0x01;
    pub const GYRO_DLPF_92: u8 = 0x02;
    pub const GYRO_DLPF_41: u8 = 0x03;
    pub const GYRO_DLPF_20: u8 = 0x04;
    pub const GYRO_DLPF_10: u8 = 0x05;
    pub const GYRO_DLPF_5: u8 = 0x06;

    // PWR_MGMNT_1
    pub const PWR_CYCLE: u8 = 0x20;
    pub const PWR_RESET: u8 = 0x80;
    pub const CLOCK_SEL_PLL: u8 = 0x01;

    // PWR_MGMNT_2
    pub const SEN_ENABLE: u8 = 0x00;
    pub const DIS_GYRO: u8 = 0x07;

    // USER_CTRL / I2C_MST_CTRL
    pub const I2C_MST_EN: u8 = 0x20;
    /// Reloj del bus secundario a 400 kHz
    pub const I2C_MST_CLK: u8 = 0x0D;

    // I2C_SLV0
    pub const I2C_SLV0_EN: u8 = 0x80;
    pub const I2C_READ_FLAG: u8 = 0x80;

    // Interrupciones
    pub const INT_DISABLE: u8 = 0x00;
    pub const INT_PULSE_50US: u8 = 0x00;
    pub const INT_WOM_EN: u8 = 0x40;
    pub const INT_RAW_RDY_EN: u8 = 0x01;
}

/// Valores de control del AK8963
pub mod ak_val {
    /// Valor esperado en el registro WHO_AM_I (0x48 = 72 decimal)
    pub const WIA_VAL: u8 = 0x48;
    pub const PWR_DOWN: u8 = 0x00;
    /// Medición continua, 16 bits, 8 Hz
    pub const CNT_MEAS1: u8 = 0x12;
    /// Medición continua, 16 bits, 100 Hz
    pub const CNT_MEAS2: u8 = 0x16;
    pub const FUSE_ROM: u8 = 0x0F;
    /// Bit de reset para CNTL2
    pub const RESET: u8 = 0x01;
}

/// Tiempos de asentamiento del hardware, en milisegundos.
///
/// Son tiempos reales del chip; cambiarlos de orden de magnitud rompe la
/// secuencia de inicialización.
pub mod timing {
    /// Espera tras cada escritura de registro antes de la relectura
    pub const WRITE_SETTLE_MS: u32 = 10;
    /// Tiempo que tardan los registros EXT_SENS_DATA en llenarse
    pub const EXT_DATA_FILL_MS: u32 = 1;
    /// Espera tras resetear el MPU9250
    pub const RESET_BOOT_MS: u32 = 1;
    /// Espera larga entre cambios de modo del AK8963
    pub const MAG_MODE_CHANGE_MS: u32 = 100;
    /// Intervalo entre muestras durante la calibración del giroscopio
    pub const CAL_SAMPLE_INTERVAL_MS: u32 = 20;
}

/// Constantes físicas
pub mod physics {
    /// Aceleración gravitacional (m/s²)
    pub const GRAVITY_MSS: f32 = 9.807;
    /// Grados a radianes
    pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
}

/// Transformación entera 3×3 que alinea los ejes del acelerómetro y el
/// giroscopio con el marco nativo del magnetómetro.
///
/// Cada fila produce un eje de salida como combinación de los tres counts de
/// entrada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap {
    pub x: [i16; 3],
    pub y: [i16; 3],
    pub z: [i16; 3],
}

impl Default for AxisMap {
    fn default() -> Self {
        // salida-X = entrada-Y, salida-Y = entrada-X, salida-Z = -entrada-Z
        Self {
            x: [0, 1, 0],
            y: [1, 0, 0],
            z: [0, 0, -1],
        }
    }
}

impl AxisMap {
    /// Aplica la transformación a un vector de counts
    pub fn apply(&self, counts: [i16; 3]) -> [i32; 3] {
        let dot = |row: [i16; 3]| {
            row[0] as i32 * counts[0] as i32
                + row[1] as i32 * counts[1] as i32
                + row[2] as i32 * counts[2] as i32
        };
        [dot(self.x), dot(self.y), dot(self.z)]
    }
}

/// Muestra decodificada en unidades físicas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuSample {
    /// Aceleración por eje (m/s²)
    pub accel: [f32; 3],
    /// Velocidad angular por eje (rad/s)
    pub gyro: [f32; 3],
    /// Campo magnético por eje (µT)
    pub mag: [f32; 3],
    /// Temperatura (°C)
    pub temp_c: f32,
}

impl Default for ImuSample {
    fn default() -> Self {
        Self {
            accel: [0.0; 3],
            gyro: [0.0; 3],
            mag: [0.0; 3],
            temp_c: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_map_default_unit_x() {
        // Un vector unitario sobre entrada-X sale por el eje Y
        let map = AxisMap::default();
        let out = map.apply([1000, 0, 0]);
        assert_eq!(out, [0, 1000, 0]);
    }

    #[test]
    fn test_axis_map_default_inverts_z() {
        let map = AxisMap::default();
        let out = map.apply([10, -20, 30]);
        assert_eq!(out, [-20, 10, -30]);
    }

    #[test]
    fn test_default_ranges() {
        assert_eq!(AccelRange::default(), AccelRange::Range16G);
        assert_eq!(GyroRange::default(), GyroRange::Range2000Dps);
        assert_eq!(DlpfBandwidth::default(), DlpfBandwidth::Bw184Hz);
    }

    #[test]
    fn test_fs_sel_values() {
        assert_eq!(AccelRange::Range16G.fs_sel(), 0x18);
        assert_eq!(GyroRange::Range250Dps.fs_sel(), 0x00);
        assert_eq!(GyroRange::Range2000Dps.fs_sel(), 0x18);
    }
}
