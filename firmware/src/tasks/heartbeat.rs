/*
* Heartbeat Task
*/

// Resources
use crate::resources::blink_half_period_ms;
use crate::resources::get_system_state;

// Library
use embassy_rp::Peri;
use embassy_rp::gpio::AnyPin;
use embassy_rp::gpio::Level;
use embassy_rp::gpio::Output;
use embassy_time::Duration;
use embassy_time::Timer;

const STEADY_POLL_MS: u64 = 100;

#[embassy_executor::task]
pub async fn heartbeat_task(led_pin: Peri<'static, AnyPin>) {
    let mut led = Output::new(led_pin, Level::Low);

    loop {
        match blink_half_period_ms(get_system_state()) {
            Some(half_period_ms) => {
                led.toggle();
                Timer::after(Duration::from_millis(half_period_ms)).await;
            }
            None => {
                led.set_high();
                Timer::after(Duration::from_millis(STEADY_POLL_MS)).await;
            }
        }
    }
}
