/*
* Step Logger Task
    Runs the whole control loop: one command byte, stimulus, sampler per tick.
*/

// Resources
use crate::resources::SensorInput;
use crate::resources::SetpointOutput;
use crate::resources::LogFileOnFlash;
use crate::resources::UsbConsole;
use crate::resources::HARDWARE;
use crate::resources::CONTROL_TICK_MS;
use crate::resources::CONSOLE_POLL_MS;
use crate::resources::STATE_IDLE;
use crate::resources::STATE_LOGGING;
use crate::resources::STATE_FAULT;
use crate::resources::is_console_open;
use crate::resources::next_command;
use crate::resources::set_system_state;

// Library
use embassy_time::Duration;
use embassy_time::Instant;
use embassy_time::Ticker;
use embassy_time::Timer;
use step_logger::StepLogger;

pub type Logger = StepLogger<SensorInput, SetpointOutput, LogFileOnFlash>;

#[embassy_executor::task]
pub async fn step_logger_task(mut logger: Logger) {
    let mut console = UsbConsole;

    while !is_console_open() {
        Timer::after(Duration::from_millis(CONSOLE_POLL_MS)).await;
    }

    logger.boot(&HARDWARE, &mut console).await;
    defmt::info!("step logger ready");

    let mut ticker = Ticker::every(Duration::from_millis(CONTROL_TICK_MS));
    loop {
        logger.tick(Instant::now().as_millis(), next_command(), &mut console).await;

        let state = if !logger.store().is_available() {
            STATE_FAULT
        } else if logger.state().logging_enabled {
            STATE_LOGGING
        } else {
            STATE_IDLE
        };
        set_system_state(state);

        ticker.next().await;
    }
}
