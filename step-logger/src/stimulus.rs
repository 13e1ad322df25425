/*
*  Stimulus Controller
*
*  BASELINE --(logging && !step && elapsed >= initial wait)--> STEPPED
*  STEPPED  --(reset)--> BASELINE
*
*  Manual +/- adjustments bypass the state machine.
*/

use crate::analog::clamp_voltage;
use crate::analog::voltage_to_code;
use crate::analog::AnalogOutput;
use crate::config::LoggerConfig;
use crate::state::RunState;

pub fn set_setpoint_voltage<O: AnalogOutput>(state: &mut RunState, output: &mut O, voltage: f32) {
    let voltage = clamp_voltage(voltage);
    state.current_setpoint = voltage;
    output.write_code(voltage_to_code(voltage));
}

pub fn step_due(state: &RunState, config: &LoggerConfig, now_ms: u64) -> bool {
    state.logging_enabled
        && !state.step_applied
        && state.elapsed_ms(now_ms) >= config.initial_wait_ms
}

/// Fires the step if it is due. Returns `true` on the tick it fires.
pub fn poll<O: AnalogOutput>(state: &mut RunState, output: &mut O, config: &LoggerConfig, now_ms: u64) -> bool {
    if !step_due(state, config, now_ms) {
        return false;
    }

    set_setpoint_voltage(state, output, config.setpoint_voltage);
    state.step_applied = true;
    true
}

pub fn reset<O: AnalogOutput>(state: &mut RunState, output: &mut O) {
    set_setpoint_voltage(state, output, 0.0);
    state.step_applied = false;
    state.logging_enabled = false;
    state.sample_count = 0;
}

/// Moves the setpoint by `delta` volts, returns the clamped result.
pub fn nudge<O: AnalogOutput>(state: &mut RunState, output: &mut O, delta: f32) -> f32 {
    let target = state.current_setpoint + delta;
    set_setpoint_voltage(state, output, target);
    state.current_setpoint
}
