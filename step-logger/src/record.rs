/*
    Log Record
        <timestamp_ms>,<setpoint_v>,<sensor_v>\n
*/

use core::fmt::Write;

use heapless::String;

use crate::config::RECORD_LINE_SIZE;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogRecord {
    pub elapsed_ms: u64,
    pub setpoint_v: f32,
    pub sensor_v: f32,
}

impl LogRecord {
    pub fn new(elapsed_ms: u64, setpoint_v: f32, sensor_v: f32) -> Self {
        Self { elapsed_ms, setpoint_v, sensor_v }
    }

    /// One CSV line. `None` only if the line does not fit the buffer, which
    /// the value ranges rule out.
    pub fn to_line(&self) -> Option<String<RECORD_LINE_SIZE>> {
        let mut line = String::new();
        writeln!(line, "{},{:.4},{:.4}", self.elapsed_ms, self.setpoint_v, self.sensor_v).ok()?;
        Some(line)
    }
}
