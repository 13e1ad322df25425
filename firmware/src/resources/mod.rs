/*
* Resources Hub
*/

/* --------------------------- Library -------------------------- */
use core::sync::atomic::AtomicBool;
use core::sync::atomic::AtomicU8;
use core::sync::atomic::Ordering;
use assign_resources::assign_resources;
use static_cell::StaticCell;

use embassy_rp::Peri;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals;
use embassy_rp::usb::InterruptHandler as UsbInterruptHandler;
use embassy_rp::adc;
use embassy_rp::adc::Adc;
use embassy_rp::pwm;
use embassy_rp::pwm::Pwm;
use embassy_rp::flash::Flash;
use embassy_rp::flash::Blocking;
use embassy_sync::channel::Channel;
use embassy_sync::pipe::Pipe;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_usb::class::cdc_acm::State;

use step_logger::AnalogInput;
use step_logger::AnalogOutput;
use step_logger::Console;
use step_logger::FlashFile;
use step_logger::OUTPUT_MAX_CODE;

/* --------------------------- Declare Modules -------------------------- */
pub mod gpio_list;
pub mod config;
pub mod analog_resources;
pub mod flash_storage;
pub mod usb_resources;
pub mod status_resources;

pub use gpio_list::*;
pub use config::*;
pub use analog_resources::*;
pub use flash_storage::*;
pub use usb_resources::*;
pub use status_resources::*;
