pub mod usb_task;
pub mod step_logger;
pub mod heartbeat;
