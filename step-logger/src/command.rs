/*
* Operator Commands
    One byte per command, letters are case insensitive.
    Anything else is ignored.
*/

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Go,
    Reset,
    Print,
    Clear,
    Info,
    ToggleLogging,
    Values,
    Help,
    Increase,
    Decrease,
}

impl TryFrom<u8> for Command {
    type Error = ();

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v.to_ascii_lowercase() {
            b'g' => Ok(Command::Go),
            b'r' => Ok(Command::Reset),
            b'p' => Ok(Command::Print),
            b'c' => Ok(Command::Clear),
            b'i' => Ok(Command::Info),
            b's' => Ok(Command::ToggleLogging),
            b'v' => Ok(Command::Values),
            b'h' | b'?' => Ok(Command::Help),
            b'+' => Ok(Command::Increase),
            b'-' => Ok(Command::Decrease),
            _ => Err(()),
        }
    }
}

pub const HELP_TEXT: &[&str] = &[
    "",
    "----------------------------------------",
    "Commands:",
    "  'g' - GO: Start step response test",
    "  'r' - RESET: Set setpoint to 0V",
    "  's' - STOP/START logging",
    "  'p' - PRINT file contents",
    "  'c' - CLEAR data file",
    "  'i' - Show file INFO",
    "  'v' - Show current VALUES",
    "  '+' - Increase setpoint by 0.1V",
    "  '-' - Decrease setpoint by 0.1V",
    "  'h' - Show this HELP",
    "----------------------------------------",
];
