//! Host fakes for the board peripherals.
#![allow(dead_code)]

use embedded_storage::nor_flash::ErrorType;
use embedded_storage::nor_flash::NorFlash;
use embedded_storage::nor_flash::NorFlashErrorKind;
use embedded_storage::nor_flash::ReadNorFlash;
use step_logger::AnalogInput;
use step_logger::AnalogOutput;
use step_logger::Console;
use step_logger::FlashFile;
use step_logger::LOG_HEADER;

pub const SECTOR: usize = 4096;

/// NOR flash in RAM: erase sets 0xFF, programming can only clear bits.
pub struct RamFlash {
    pub data: Vec<u8>,
}

impl RamFlash {
    pub fn new(size: usize) -> Self {
        Self { data: vec![0xFF; size] }
    }
}

impl ErrorType for RamFlash {
    type Error = NorFlashErrorKind;
}

impl ReadNorFlash for RamFlash {
    const READ_SIZE: usize = 1;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        let src = self.data.get(start..start + bytes.len()).ok_or(NorFlashErrorKind::OutOfBounds)?;
        bytes.copy_from_slice(src);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl NorFlash for RamFlash {
    const WRITE_SIZE: usize = 1;
    const ERASE_SIZE: usize = SECTOR;

    fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        let cells = self.data.get_mut(from as usize..to as usize).ok_or(NorFlashErrorKind::OutOfBounds)?;
        cells.fill(0xFF);
        Ok(())
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        let cells = self.data.get_mut(start..start + bytes.len()).ok_or(NorFlashErrorKind::OutOfBounds)?;
        for (cell, byte) in cells.iter_mut().zip(bytes) {
            *cell &= *byte;
        }
        Ok(())
    }
}

pub fn mount(sectors: usize) -> FlashFile<RamFlash> {
    let len = sectors * SECTOR;
    FlashFile::mount(RamFlash::new(len), 0, len as u32, LOG_HEADER.as_bytes()).unwrap()
}

/// Sensor returning a constant raw count.
pub struct Sensor(pub u16);

impl AnalogInput for Sensor {
    type Error = ();

    fn read_raw(&mut self) -> Result<u16, ()> {
        Ok(self.0)
    }
}

#[derive(Default)]
pub struct Setpoint {
    pub codes: Vec<u16>,
}

impl AnalogOutput for Setpoint {
    fn write_code(&mut self, code: u16) {
        self.codes.push(code);
    }
}

#[derive(Default)]
pub struct Terminal {
    pub out: String,
}

impl Terminal {
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

impl Console for Terminal {
    async fn write(&mut self, bytes: &[u8]) {
        self.out.push_str(std::str::from_utf8(bytes).unwrap());
    }
}

/// File body from a `p` dump, banners stripped.
pub fn dump_body(out: &str) -> &str {
    out.split_once("========== FILE CONTENTS ==========\n")
        .and_then(|(_, rest)| rest.rsplit_once("====================================\n"))
        .map(|(body, _)| body)
        .unwrap()
}
