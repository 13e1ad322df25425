/*
    Status LED Resources
        IDLE     1 Hz blink
        LOGGING  5 Hz blink
        FAULT    solid on (log storage unavailable)
*/

use super::*;

pub const STATE_IDLE: u8 = 0;
pub const STATE_LOGGING: u8 = 1;
pub const STATE_FAULT: u8 = 2;

pub static SYSTEM_STATE: AtomicU8 = AtomicU8::new(STATE_IDLE);

pub fn set_system_state(state: u8) {
    SYSTEM_STATE.store(state, Ordering::Relaxed);
}

pub fn get_system_state() -> u8 {
    SYSTEM_STATE.load(Ordering::Relaxed)
}

/// Half period of the blink for `state`, `None` for a steady LED.
pub fn blink_half_period_ms(state: u8) -> Option<u64> {
    match state {
        STATE_LOGGING => Some(100),
        STATE_FAULT => None,
        _ => Some(500),
    }
}
