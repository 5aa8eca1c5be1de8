use linux_embedded_hal::{Delay, I2cdev};
use mpu9250_rs::register::mpu9250;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();
    println!("MPU9250 - Ejemplo básico");

    // Flag para controlar la ejecución del programa
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    // Configurar el manejador para Ctrl+C
    ctrlc::set_handler(move || {
        println!("\nDeteniendo el programa...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error al configurar el manejador de Ctrl+C");

    // Crear instancia de I2C para Linux
    let i2c = match I2cdev::new("/dev/i2c-1") {
        Ok(i2c) => i2c,
        Err(e) => {
            eprintln!("Error al abrir dispositivo I2C: {:?}", e);
            return;
        }
    };

    // Crear dispositivo MPU9250 con la dirección I2C estándar
    let mut device = mpu9250_rs::new_i2c_device(i2c, mpu9250::I2C_ADDR, Delay);

    // Inicializar el dispositivo: reloj, rangos, relevo del AK8963 y
    // calibración del giroscopio (el sensor debe estar quieto)
    println!("Inicializando (mantener el sensor quieto)...");
    if let Err(e) = device.initialize() {
        eprintln!("Error al inicializar el dispositivo: {:?}", e);
        return;
    }
    println!("Dispositivo inicializado correctamente");

    // Leer datos continuamente hasta que se presione Ctrl+C
    println!("Leyendo datos. Presiona Ctrl+C para detener...");

    while running.load(Ordering::SeqCst) {
        match device.read_sample() {
            Ok(sample) => {
                println!(
                    "Acelerómetro: x={:.3} m/s², y={:.3} m/s², z={:.3} m/s²",
                    sample.accel[0], sample.accel[1], sample.accel[2]
                );
                println!(
                    "Giroscopio: x={:.4} rad/s, y={:.4} rad/s, z={:.4} rad/s",
                    sample.gyro[0], sample.gyro[1], sample.gyro[2]
                );
                println!(
                    "Magnetómetro: x={:.2}µT, y={:.2}µT, z={:.2}µT",
                    sample.mag[0], sample.mag[1], sample.mag[2]
                );
                println!("Temperatura: {:.2}°C", sample.temp_c);
                println!("-------------------");
            }
            Err(e) => eprintln!("Error al leer la muestra: {:?}", e),
        }
        thread::sleep(Duration::from_millis(200));
    }

    println!("Ejemplo finalizado");
}
