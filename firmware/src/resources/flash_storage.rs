/*
    Flash Storage Resources
*/

use super::*;

use step_logger::LOG_HEADER;

pub type LogFlash = Flash<'static, peripherals::FLASH, Blocking, FLASH_SIZE>;
pub type LogFileOnFlash = FlashFile<LogFlash>;

/// Mounts the CSV log in the reserved region. `None` leaves the logger
/// running without storage, the failure is reported on the console at boot.
pub fn mount_log_file(flash: Peri<'static, peripherals::FLASH>) -> Option<LogFileOnFlash> {
    let flash = LogFlash::new_blocking(flash);

    match FlashFile::mount(flash, LOG_REGION_OFFSET, LOG_REGION_SIZE, LOG_HEADER.as_bytes()) {
        Ok(file) => {
            defmt::info!("log region mounted at {:#x}", LOG_REGION_OFFSET);
            Some(file)
        }
        Err(e) => {
            defmt::error!("log region mount failed: {}", defmt::Debug2Format(&e));
            None
        }
    }
}
