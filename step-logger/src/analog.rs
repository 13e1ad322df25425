/*
    Analog Input / Output
*/

use core::fmt::Debug;

use crate::config::ADC_MAX_COUNT;
use crate::config::ADC_REFERENCE_V;
use crate::config::OUTPUT_MAX_CODE;
use crate::config::OUTPUT_MAX_V;

/* --------------------------- Peripheral Traits -------------------------- */
/// Sensor input, one conversion per call.
pub trait AnalogInput {
    type Error: Debug;

    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// Setpoint output taking a `0..=OUTPUT_MAX_CODE` code.
pub trait AnalogOutput {
    fn write_code(&mut self, code: u16);
}

/* --------------------------- Conversion -------------------------- */
pub fn adc_to_voltage(raw: u16) -> f32 {
    let raw = raw.min(ADC_MAX_COUNT);
    (raw as f32 / ADC_MAX_COUNT as f32) * ADC_REFERENCE_V
}

pub fn clamp_voltage(voltage: f32) -> f32 {
    if voltage.is_nan() {
        return 0.0;
    }
    voltage.clamp(0.0, OUTPUT_MAX_V)
}

/// Output code for an already clamped voltage, truncated like the DAC does.
pub fn voltage_to_code(voltage: f32) -> u16 {
    let code = (clamp_voltage(voltage) / OUTPUT_MAX_V) * OUTPUT_MAX_CODE as f32;
    (code as u16).min(OUTPUT_MAX_CODE)
}

/* --------------------------- Tests -------------------------- */
