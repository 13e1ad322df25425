/*
* USB Resources
    Interface 0: operator console (CDC-ACM)
        host -> device  single byte commands into COMMAND_CHANNEL
        device -> host  text lines drained from CONSOLE_PIPE
    Interface 1: `log` records (embassy-usb-logger)
*/

use super::*;

/* --------------------------- Console State -------------------------- */
// Set while a terminal holds DTR on the console interface
pub static CONSOLE_OPEN: AtomicBool = AtomicBool::new(false);

pub fn set_console_open(open: bool) {
    CONSOLE_OPEN.store(open, Ordering::Relaxed);
}

pub fn is_console_open() -> bool {
    CONSOLE_OPEN.load(Ordering::Relaxed)
}

/* --------------------------- Console -------------------------- */
pub struct UsbConsole;

impl Console for UsbConsole {
    async fn write(&mut self, bytes: &[u8]) {
        CONSOLE_PIPE.write_all(bytes).await;
    }
}

pub fn next_command() -> Option<u8> {
    COMMAND_CHANNEL.try_receive().ok()
}
