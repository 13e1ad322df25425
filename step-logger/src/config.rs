/*
*  Step Response Test Config
*
*  Analog Front End
*  - ADC: 12 bit (0 - 4095), 3.3V reference
*  - Setpoint output: 8 bit (0 - 255) for 0 - 3.3V
*    feeding a 0-3.3V to 4-20mA converter (0V -> 4mA, 3.3V -> 20mA)
*/

/* --------------------------- Analog Front End -------------------------- */
pub const ADC_RESOLUTION_BITS: u32 = 12;
pub const ADC_MAX_COUNT: u16 = (1 << ADC_RESOLUTION_BITS) - 1;
pub const ADC_REFERENCE_V: f32 = 3.3;

pub const OUTPUT_MAX_V: f32 = 3.3;
pub const OUTPUT_MAX_CODE: u16 = 255;
pub const MANUAL_STEP_V: f32 = 0.1;

/* --------------------------- Log File -------------------------- */
pub const LOG_HEADER: &str = "timestamp_ms,setpoint_v,sensor_v\n";
pub const MAX_FILE_SIZE: usize = 1_000_000;

/// Samples between two progress lines on the console.
pub const PROGRESS_EVERY: u32 = 10;

/* --------------------------- Buffers -------------------------- */
pub const RECORD_LINE_SIZE: usize = 48;
pub const CONSOLE_LINE_SIZE: usize = 128;
pub const DUMP_CHUNK_SIZE: usize = 256;

/* --------------------------- Test Config -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoggerConfig {
    pub sampling_interval_ms: u64,
    pub initial_wait_ms: u64,
    pub setpoint_voltage: f32,
    pub max_file_size: usize,
}

pub const DEFAULT_CONFIG: LoggerConfig = LoggerConfig {
    sampling_interval_ms: 500,
    initial_wait_ms: 3000,
    setpoint_voltage: 1.5,
    max_file_size: MAX_FILE_SIZE,
};

impl Default for LoggerConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}
