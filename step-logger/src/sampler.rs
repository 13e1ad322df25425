/*
    Sampler

    One ADC read per sampling interval while logging is enabled. The record
    carries the time since the run started and the setpoint in force at the
    moment of the read.
*/

use crate::analog::adc_to_voltage;
use crate::analog::AnalogInput;
use crate::config::LoggerConfig;
use crate::error::StoreError;
use crate::log_file::LogFile;
use crate::log_store::LogStore;
use crate::record::LogRecord;
use crate::state::RunState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleOutcome {
    NotDue,
    /// The ADC read failed, nothing was logged this interval.
    Skipped,
    Logged(LogRecord),
    /// The append failed and logging has been disabled.
    Stopped(StoreError),
}

pub fn due(state: &RunState, config: &LoggerConfig, now_ms: u64) -> bool {
    state.logging_enabled && now_ms.saturating_sub(state.last_sample_ms) >= config.sampling_interval_ms
}

pub fn sample<A, F>(
    state: &mut RunState,
    input: &mut A,
    store: &mut LogStore<F>,
    config: &LoggerConfig,
    now_ms: u64,
) -> SampleOutcome
where
    A: AnalogInput,
    F: LogFile,
{
    if !due(state, config, now_ms) {
        return SampleOutcome::NotDue;
    }
    state.last_sample_ms = now_ms;

    let raw = match input.read_raw() {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("sensor read failed: {:?}", e);
            return SampleOutcome::Skipped;
        }
    };

    let record = LogRecord::new(state.elapsed_ms(now_ms), state.current_setpoint, adc_to_voltage(raw));
    match store.append(&record) {
        Ok(()) => {
            state.sample_count = state.sample_count.wrapping_add(1);
            SampleOutcome::Logged(record)
        }
        Err(e) => {
            state.logging_enabled = false;
            log::warn!("logging stopped: {}", e);
            SampleOutcome::Stopped(e)
        }
    }
}
