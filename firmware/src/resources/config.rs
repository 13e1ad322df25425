/*
*  Default Firmware Config
*
*  Raspberry Pi Pico (RP2040, 2 MiB flash)
*  - Sensor input on ADC0 (GPIO 26), 12 bit, 3.3V reference
*  - Setpoint output on PWM slice 0 A (GPIO 16), 8 bit duty,
*    RC filtered to 0 - 3.3V before the 0-3.3V to 4-20mA converter
*/

use super::*;

use step_logger::HardwareInfo;
use step_logger::LoggerConfig;
use step_logger::DEFAULT_CONFIG;

/* --------------------------- Step Test Config -------------------------- */
pub const LOGGER_CONFIG: LoggerConfig = DEFAULT_CONFIG;
pub const CONTROL_TICK_MS: u64 = 1;

pub const HARDWARE: HardwareInfo = HardwareInfo {
    board: "RP2040",
    sensor_pin: 26,
    setpoint_pin: 16,
    setpoint_driver: "PWM",
};

/* --------------------------- Setpoint PWM -------------------------- */
// 125 MHz / (PWM_TOP + 1) = 490 kHz carrier, compare value = output code
pub const PWM_TOP: u16 = OUTPUT_MAX_CODE - 1;

/* --------------------------- Flash Log Region -------------------------- */
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;
pub const LOG_REGION_OFFSET: u32 = 1024 * 1024;
pub const LOG_REGION_SIZE: u32 = 1024 * 1024;

/* --------------------------- USB Communication -------------------------- */
pub const USB_PACKET_SIZE: usize = 64;
pub const COMMAND_CHANNEL_SIZE: usize = 64;
pub const CONSOLE_PIPE_SIZE: usize = 1024;
pub const USB_LOG_BUFFER_SIZE: usize = 1024;
pub const CONSOLE_POLL_MS: u64 = 10;

/* --------------------------- Communication Channels -------------------------- */
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, u8, COMMAND_CHANNEL_SIZE> = Channel::new();
pub static CONSOLE_PIPE: Pipe<CriticalSectionRawMutex, CONSOLE_PIPE_SIZE> = Pipe::new();

/* --------------------------- USB Builder -------------------------- */
pub static CONSOLE_STATE: StaticCell<State> = StaticCell::new();
pub static LOGGER_STATE: StaticCell<State> = StaticCell::new();
pub static CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
pub static BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
pub static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
