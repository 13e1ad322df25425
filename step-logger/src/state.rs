/*
    Run State
*/

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StimulusPhase {
    Baseline,
    Stepped,
}

/// Shared state of the control loop, owned by the orchestrator and lent to
/// each component for the duration of one call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunState {
    pub logging_enabled: bool,
    pub step_applied: bool,
    pub step_start_ms: u64,
    pub last_sample_ms: u64,
    pub sample_count: u32,
    pub current_setpoint: f32,
}

impl RunState {
    pub const fn new() -> Self {
        Self {
            logging_enabled: false,
            step_applied: false,
            step_start_ms: 0,
            last_sample_ms: 0,
            sample_count: 0,
            current_setpoint: 0.0,
        }
    }

    pub fn phase(&self) -> StimulusPhase {
        if self.step_applied {
            return StimulusPhase::Stepped;
        }
        StimulusPhase::Baseline
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.step_start_ms)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
