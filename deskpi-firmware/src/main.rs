//! DeskPi - Wheeled Robot Firmware
//!
//! Firmware for the DeskPi two-motor robot on an RP2040 board: SSD1306
//! status display, WS2812 strip, line/light sensors, ultrasonic ranger
//! and IR receiver. Board wiring is in [`board`].

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::Peri;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use deskpi_core::config::{parse_config, RobotConfig};
use deskpi_drivers::accessory::{IrReceiver, LedStrip, Ultrasonic};
use deskpi_drivers::motor::{DcMotor, MotorPair};
use deskpi_drivers::sensor::{AnalogChannels, SensorBank};
use deskpi_drivers::Ssd1306;
use deskpi_hal::I2cConfig;
use deskpi_hal_rp2040::{AdcInput, AnalogBank, AnalogSource, BlockingI2c, GpioInput, GpioOutput};

use crate::board::Robot;
use crate::tasks::led_strip::FrameStrip;

/// Embedded configuration (compiled into firmware)
/// Edit robot.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../robot.toml");

mod board;
mod channels;
mod status;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

// Shared by the five sensor handles; lives forever
static ANALOG: StaticCell<RefCell<AnalogBank>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("DeskPi firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // OLED on I2C0 (SDA GPIO20, SCL GPIO21)
    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_21,
        p.PIN_20,
        BlockingI2c::config(I2cConfig::default()),
    );
    let oled = Ssd1306::new(BlockingI2c(i2c), config.oled);
    info!("OLED at {=u8:#x}, policy {}", config.oled.address, config.oled.bus_errors);

    // Motors
    let motors = MotorPair::new(
        DcMotor::new(output(p.PIN_14.into()), output(p.PIN_13.into())),
        DcMotor::new(output(p.PIN_16.into()), output(p.PIN_15.into())),
    );

    // Sensors: grey on ADC0/ADC1, volume and light through the mux on ADC2
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let bank = ANALOG.init(RefCell::new(AnalogBank::new(
        adc,
        [
            Channel::new_pin(p.PIN_26, Pull::None),
            Channel::new_pin(p.PIN_27, Pull::None),
            Channel::new_pin(p.PIN_28, Pull::None),
        ],
        [output(p.PIN_2.into()).0, output(p.PIN_3.into()).0],
    )));
    let bank: &'static RefCell<AnalogBank> = bank;
    let sensors = SensorBank::new(
        AnalogChannels {
            volume: AdcInput::new(bank, AnalogSource::Volume),
            left_optical: AdcInput::new(bank, AnalogSource::LeftOptical),
            right_optical: AdcInput::new(bank, AnalogSource::RightOptical),
            left_grey: AdcInput::new(bank, AnalogSource::LeftGrey),
            right_grey: AdcInput::new(bank, AnalogSource::RightGrey),
        },
        GpioInput(Input::new(p.PIN_11, Pull::Up)),
        GpioInput(Input::new(p.PIN_5, Pull::Up)),
        config.sensor,
    );

    // Ultrasonic ranger (trigger GPIO12, echo GPIO9) and IR receiver (GPIO7)
    let ranger = Ultrasonic::new(
        output(p.PIN_12.into()),
        GpioInput(Input::new(p.PIN_9, Pull::Down)),
        Delay,
        config.ultrasonic,
    );
    let ir = IrReceiver::new(GpioInput(Input::new(p.PIN_7, Pull::Up)), config.ir);

    // WS2812 strip on PIO0 (data GPIO6), enable on GPIO8
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_6, &program);
    let leds = LedStrip::new(
        FrameStrip::new(config.led.count as usize),
        GpioOutput(Output::new(p.PIN_8, Level::High)),
    );
    info!("{} LEDs, brightness {}", config.led.count, config.led.brightness);

    let robot = Robot {
        oled,
        motors,
        sensors,
        ranger,
        ir,
        leds,
    };

    spawner
        .spawn(tasks::led_strip_task(ws2812, config.led.brightness))
        .unwrap();
    spawner.spawn(tasks::robot_task(robot, config.ui)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do; keeps the PIO common state alive
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Output starting low
fn output(pin: Peri<'static, AnyPin>) -> GpioOutput {
    GpioOutput(Output::new(pin, Level::Low))
}

/// Parse the embedded robot.toml
///
/// build.rs has already validated the file; defaults are only a guard
/// against the two parsers disagreeing.
fn load_config() -> RobotConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            error!("Using default configuration");
            RobotConfig::default()
        }
    }
}
