/*
    Resource Allocation Module
*/

use super::*;

assign_resources! {
    analog: AnalogResources {
        ADC: ADC,
        Sensor_PIN: PIN_26,
        Setpoint_PIN: PIN_16,
        SLICE: PWM_SLICE0,
    },

    storage: StorageResources {
        FLASH: FLASH,
    },

    status: StatusResources {
        LED_PIN: PIN_25,
    },
}

bind_interrupts!(pub struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<peripherals::USB>;
});
