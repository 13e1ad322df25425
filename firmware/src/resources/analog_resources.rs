/*
    Analog Front End Resources
        Sensor:   ADC0 one-shot conversion
        Setpoint: PWM duty = code / (PWM_TOP + 1)
*/

use super::*;

use embassy_rp::gpio::Pull;

/* --------------------------- Sensor Input -------------------------- */
pub struct SensorInput {
    adc: Adc<'static, adc::Blocking>,
    channel: adc::Channel<'static>,
}

impl SensorInput {
    pub fn new(adc: Peri<'static, peripherals::ADC>, pin: Peri<'static, peripherals::PIN_26>) -> Self {
        Self {
            adc: Adc::new_blocking(adc, adc::Config::default()),
            channel: adc::Channel::new_pin(pin, Pull::None),
        }
    }
}

impl AnalogInput for SensorInput {
    type Error = adc::Error;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        self.adc.blocking_read(&mut self.channel)
    }
}

/* --------------------------- Setpoint Output -------------------------- */
pub struct SetpointOutput {
    pwm: Pwm<'static>,
    config: pwm::Config,
}

impl SetpointOutput {
    pub fn new(slice: Peri<'static, peripherals::PWM_SLICE0>, pin: Peri<'static, peripherals::PIN_16>) -> Self {
        let mut config = pwm::Config::default();
        config.top = PWM_TOP;
        config.compare_a = 0;

        Self {
            pwm: Pwm::new_output_a(slice, pin, config.clone()),
            config,
        }
    }
}

impl AnalogOutput for SetpointOutput {
    fn write_code(&mut self, code: u16) {
        self.config.compare_a = code.min(OUTPUT_MAX_CODE);
        self.pwm.set_config(&self.config);
    }
}
