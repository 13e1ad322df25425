/*
* Step Logger
    One tick = at most one command, then the stimulus, then the sampler,
    all against the same timestamp.
*/

use crate::analog::adc_to_voltage;
use crate::analog::AnalogInput;
use crate::analog::AnalogOutput;
use crate::command::Command;
use crate::command::HELP_TEXT;
use crate::config::LoggerConfig;
use crate::config::MANUAL_STEP_V;
use crate::config::PROGRESS_EVERY;
use crate::console::Console;
use crate::error::StoreError;
use crate::log_file::LogFile;
use crate::log_store::LogStore;
use crate::sampler;
use crate::sampler::SampleOutcome;
use crate::say;
use crate::state::RunState;
use crate::stimulus;

/// Board description printed at boot.
#[derive(Clone, Copy, Debug)]
pub struct HardwareInfo {
    pub board: &'static str,
    pub sensor_pin: u8,
    pub setpoint_pin: u8,
    pub setpoint_driver: &'static str,
}

pub struct StepLogger<A, O, F>
where
    A: AnalogInput,
    O: AnalogOutput,
    F: LogFile,
{
    config: LoggerConfig,
    state: RunState,
    input: A,
    output: O,
    store: LogStore<F>,
}

impl<A, O, F> StepLogger<A, O, F>
where
    A: AnalogInput,
    O: AnalogOutput,
    F: LogFile,
{
    /// Drives the output to 0 V before returning. `file` is `None` when the
    /// log storage failed to mount.
    pub fn new(config: LoggerConfig, input: A, mut output: O, file: Option<F>) -> Self {
        let mut state = RunState::new();
        stimulus::set_setpoint_voltage(&mut state, &mut output, 0.0);

        Self {
            config,
            state,
            input,
            output,
            store: LogStore::new(file, config.max_file_size),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn store(&mut self) -> &mut LogStore<F> {
        &mut self.store
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn input_mut(&mut self) -> &mut A {
        &mut self.input
    }

    /* --------------------------- Boot -------------------------- */
    pub async fn boot<C: Console>(&mut self, hardware: &HardwareInfo, console: &mut C) {
        say!(console);
        say!(console, "========================================");
        say!(console, "   {} Temperature Station Logger", hardware.board);
        say!(console, "   With Setpoint Control");
        say!(console, "========================================");

        if self.store.is_available() {
            say!(console, "Log storage mounted successfully");
        } else {
            say!(console, "ERROR: Log storage mount failed!");
        }

        say!(console);
        say!(console, "Hardware Configuration:");
        say!(console, "  Sensor Input:    GPIO {} (ADC)", hardware.sensor_pin);
        say!(console, "  Setpoint Output: GPIO {} ({})", hardware.setpoint_pin, hardware.setpoint_driver);
        say!(console, "  Sampling Rate:   {} ms", self.config.sampling_interval_ms);
        say!(console, "  Step Setpoint:   {:.2} V", self.config.setpoint_voltage);

        self.print_help(console).await;
        self.print_info(console).await;

        say!(console);
        say!(console, ">>> Setpoint at 0V. Press 'g' to start step response test <<<");
        say!(console);
    }

    /* --------------------------- Control Loop -------------------------- */
    pub async fn tick<C: Console>(&mut self, now_ms: u64, byte: Option<u8>, console: &mut C) {
        if let Some(command) = byte.and_then(|b| Command::try_from(b).ok()) {
            self.execute(command, now_ms, console).await;
        }

        if stimulus::poll(&mut self.state, &mut self.output, &self.config, now_ms) {
            log::info!("step applied at {} ms", self.state.elapsed_ms(now_ms));
            say!(console);
            say!(console, "========================================");
            say!(console, ">>> STEP APPLIED! <<<");
            say!(console, ">>> Setpoint changed: 0V → {:.2}V <<<", self.state.current_setpoint);
            say!(console, "========================================");
            say!(console);
        }

        let outcome = sampler::sample(&mut self.state, &mut self.input, &mut self.store, &self.config, now_ms);
        match outcome {
            SampleOutcome::Logged(record) if self.state.sample_count % PROGRESS_EVERY == 0 => {
                say!(
                    console,
                    "[{}] t={} ms, Setpoint={:.2}V, Sensor={:.3}V",
                    self.state.sample_count,
                    record.elapsed_ms,
                    record.setpoint_v,
                    record.sensor_v
                );
            }
            SampleOutcome::Stopped(StoreError::CapacityExceeded) => {
                say!(console, "WARNING: Max file size reached. Stopping logging.");
            }
            SampleOutcome::Stopped(_) => {
                say!(console, "ERROR: Could not open file for writing");
            }
            _ => {}
        }
    }

    pub async fn execute<C: Console>(&mut self, command: Command, now_ms: u64, console: &mut C) {
        log::info!("command {:?}", command);
        match command {
            Command::Go => self.go(now_ms, console).await,
            Command::Reset => self.reset(console).await,
            Command::Print => self.print_file(console).await,
            Command::Clear => self.clear_file(console).await,
            Command::Info => self.print_info(console).await,
            Command::ToggleLogging => self.toggle_logging(console).await,
            Command::Values => self.print_values(console).await,
            Command::Help => self.print_help(console).await,
            Command::Increase => self.adjust_setpoint(MANUAL_STEP_V, console).await,
            Command::Decrease => self.adjust_setpoint(-MANUAL_STEP_V, console).await,
        }
    }

    /* --------------------------- Commands -------------------------- */
    async fn go<C: Console>(&mut self, now_ms: u64, console: &mut C) {
        if self.state.step_applied {
            say!(console, "Step already applied. Press 'r' to reset first.");
            return;
        }

        self.clear_file(console).await;
        self.state.logging_enabled = true;
        self.state.step_start_ms = now_ms;

        say!(console);
        say!(console, ">>> LOGGING STARTED - Recording baseline... <<<");
        say!(console, ">>> Step will be applied in {} ms <<<", self.config.initial_wait_ms);
        say!(console);
    }

    async fn reset<C: Console>(&mut self, console: &mut C) {
        stimulus::reset(&mut self.state, &mut self.output);
        say!(console);
        say!(console, ">>> RESET: Setpoint back to 0V. Press 'g' to start new test <<<");
        say!(console);
    }

    async fn print_file<C: Console>(&mut self, console: &mut C) {
        self.state.logging_enabled = false;
        if let Err(e) = self.store.dump(console).await {
            log::error!("dump failed: {}", e);
        }
    }

    async fn clear_file<C: Console>(&mut self, console: &mut C) {
        match self.store.clear() {
            Ok(()) => {
                self.state.sample_count = 0;
                say!(console, "Data file cleared");
            }
            Err(_) => {
                say!(console, "ERROR: Could not clear file");
            }
        }
    }

    async fn print_info<C: Console>(&mut self, console: &mut C) {
        say!(console);
        say!(console, "---------- FILE INFO ----------");
        match self.store.info() {
            Ok(info) => {
                say!(console, "Storage Total: {} bytes", info.usage.total_bytes);
                say!(console, "Storage Used:  {} bytes", info.usage.used_bytes);
                say!(console, "Storage Free:  {} bytes", info.usage.free_bytes());
                say!(console, "Data file size: {} bytes", info.file_size);
                say!(console, "Total samples: {}", info.record_count);
            }
            Err(e) => {
                say!(console, "ERROR: {}", e);
            }
        }
        say!(console, "-------------------------------");
        say!(console);
    }

    async fn toggle_logging<C: Console>(&mut self, console: &mut C) {
        self.state.logging_enabled = !self.state.logging_enabled;
        say!(console, "Logging {}", if self.state.logging_enabled { "ENABLED" } else { "DISABLED" });
    }

    async fn print_values<C: Console>(&mut self, console: &mut C) {
        say!(console);
        say!(console, "Current Setpoint: {:.2} V", self.state.current_setpoint);
        match self.input.read_raw() {
            Ok(raw) => say!(console, "Current Sensor:   {:.3} V", adc_to_voltage(raw)),
            Err(e) => {
                log::warn!("sensor read failed: {:?}", e);
                say!(console, "Current Sensor:   read error");
            }
        }
        say!(console, "Step Applied:     {}", if self.state.step_applied { "YES" } else { "NO" });
        say!(console, "Logging:          {}", if self.state.logging_enabled { "ON" } else { "OFF" });
        say!(console, "Samples:          {}", self.state.sample_count);
        say!(console);
    }

    async fn print_help<C: Console>(&mut self, console: &mut C) {
        for line in HELP_TEXT {
            say!(console, "{}", line);
        }
    }

    async fn adjust_setpoint<C: Console>(&mut self, delta: f32, console: &mut C) {
        let setpoint = stimulus::nudge(&mut self.state, &mut self.output, delta);
        say!(console, "Setpoint: {:.2} V", setpoint);
    }
}
