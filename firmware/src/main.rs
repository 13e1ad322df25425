#![no_std]
#![no_main]

// Mod
mod tasks;
mod resources;

// Resources
use crate::resources::Irqs;
use crate::resources::AssignedResources;
use crate::resources::AnalogResources;
use crate::resources::StorageResources;
use crate::resources::StatusResources;
use crate::resources::SensorInput;
use crate::resources::SetpointOutput;
use crate::resources::mount_log_file;
use crate::resources::set_system_state;
use crate::resources::LOGGER_CONFIG;
use crate::resources::STATE_FAULT;
use crate::resources::USB_PACKET_SIZE;
use crate::resources::CONSOLE_STATE;
use crate::resources::LOGGER_STATE;
use crate::resources::CONFIG_DESC;
use crate::resources::BOS_DESC;
use crate::resources::CONTROL_BUF;

// Tasks
use crate::tasks::usb_task::usb_device_task;
use crate::tasks::usb_task::console_rx_task;
use crate::tasks::usb_task::console_tx_task;
use crate::tasks::usb_task::usb_logger_task;
use crate::tasks::step_logger::step_logger_task;
use crate::tasks::heartbeat::heartbeat_task;

// Library
use defmt_rtt as _;
use panic_probe as _;

use embassy_usb::class::cdc_acm::CdcAcmClass;
use embassy_usb::class::cdc_acm::State;
use embassy_rp::usb::Driver;
use embassy_executor::Spawner;
use step_logger::StepLogger;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let ph = embassy_rp::init(Default::default());
    let p = split_resources!(ph);
    let usb_driver = Driver::new(ph.USB, Irqs);

    let config = {
        let mut config = embassy_usb::Config::new(0xc0de, 0xcafe);
        config.manufacturer = Some("Embassy");
        config.product = Some("Step Response Logger");
        config.serial_number = Some("12345678");
        config.max_power = 100;
        config.max_packet_size_0 = 64;

        // Two CDC-ACM functions need interface association descriptors
        config.device_class = 0xEF;
        config.device_sub_class = 0x02;
        config.device_protocol = 0x01;
        config.composite_with_iads = true;
        config
    };

    let mut builder = embassy_usb::Builder::new(
        usb_driver,
        config,
        CONFIG_DESC.init([0; 256]),
        BOS_DESC.init([0; 256]),
        &mut [],
        CONTROL_BUF.init([0; 64]),
    );

    let console_class = CdcAcmClass::new(&mut builder, CONSOLE_STATE.init(State::new()), USB_PACKET_SIZE as u16);
    let logger_class = CdcAcmClass::new(&mut builder, LOGGER_STATE.init(State::new()), USB_PACKET_SIZE as u16);
    let usb_dev = builder.build();
    let (console_tx, console_rx) = console_class.split();

    // Setpoint goes to 0V before anything else
    let sensor = SensorInput::new(p.analog.ADC, p.analog.Sensor_PIN);
    let setpoint = SetpointOutput::new(p.analog.SLICE, p.analog.Setpoint_PIN);

    let log_file = mount_log_file(p.storage.FLASH);
    if log_file.is_none() {
        set_system_state(STATE_FAULT);
    }

    let logger = StepLogger::new(LOGGER_CONFIG, sensor, setpoint, log_file);

    spawner.must_spawn(usb_device_task(usb_dev));
    spawner.must_spawn(console_rx_task(console_rx));
    spawner.must_spawn(console_tx_task(console_tx));
    spawner.must_spawn(usb_logger_task(logger_class));
    spawner.must_spawn(heartbeat_task(p.status.LED_PIN.into()));
    spawner.must_spawn(step_logger_task(logger));
}
