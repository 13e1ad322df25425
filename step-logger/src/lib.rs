//! Step response logger
//!
//! Hardware independent half of the step response firmware. One control loop
//! samples an analog input, fires a one-shot setpoint step on an analog output
//! and appends `timestamp_ms,setpoint_v,sensor_v` lines to a size-bounded log
//! file stored in NOR flash. The operator drives it with single-byte commands.
//!
//! The board crate provides the peripherals through [`AnalogInput`],
//! [`AnalogOutput`], a [`NorFlash`](embedded_storage::nor_flash::NorFlash)
//! region for [`FlashFile`] and a [`Console`], then calls
//! [`StepLogger::tick`] from its loop.

#![cfg_attr(not(test), no_std)]

/* --------------------------- Declare Modules -------------------------- */
pub mod analog;
pub mod command;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod flash_file;
pub mod log_file;
pub mod log_store;
pub mod record;
pub mod sampler;
pub mod state;
pub mod stimulus;

#[cfg(test)]
mod testing;

pub use analog::*;
pub use command::Command;
pub use config::*;
pub use console::Console;
pub use controller::HardwareInfo;
pub use controller::StepLogger;
pub use error::*;
pub use flash_file::FlashFile;
pub use log_file::*;
pub use log_store::*;
pub use record::LogRecord;
pub use state::*;
