/*
    Operator Console
*/

use core::fmt;
use core::fmt::Write;

use heapless::String;

use crate::config::CONSOLE_LINE_SIZE;

/// Human readable output channel. Writes may wait for the transport but
/// never fail, a closed channel just drops the bytes.
#[allow(async_fn_in_trait)]
pub trait Console {
    async fn write(&mut self, bytes: &[u8]);
}

pub fn format_line(args: fmt::Arguments<'_>) -> String<CONSOLE_LINE_SIZE> {
    let mut line = String::new();
    if line.write_fmt(args).is_err() || line.push('\n').is_err() {
        log::warn!("console line truncated");
    }
    line
}

/// Formats one line and writes it to the console, awaiting inside.
#[macro_export]
macro_rules! say {
    ($console:expr) => {
        $crate::console::Console::write(&mut *$console, b"\n").await
    };
    ($console:expr, $($arg:tt)*) => {{
        let line = $crate::console::format_line(format_args!($($arg)*));
        $crate::console::Console::write(&mut *$console, line.as_bytes()).await;
    }};
}
