/*
*  Flash Log File
*
*  One append-only text file stored in a reserved NOR flash region.
*  The file is the prefix of the region up to the first erased byte,
*  text never contains 0xFF so the length is recovered by scanning at mount.
*  Mount erases the whole region when anything past the end is programmed.
*
*  A program that fails halfway leaves its bytes in the file. They are closed
*  with a newline so the next line starts clean, the torn line stays malformed.
*
*  Region Layout
*      [base ...................... base + len) file bytes
*      [base + len ......... base + region_len) erased (0xFF)
*/

use core::cmp::min;

use embedded_storage::nor_flash::NorFlash;

use crate::error::FlashFileError;
use crate::log_file::FsUsage;
use crate::log_file::LogFile;

const ERASED: u8 = 0xFF;
const SCAN_CHUNK: usize = 256;

/* --------------------------- Flash File -------------------------- */
pub struct FlashFile<F> {
    flash: F,
    base: u32,
    region_len: u32,
    len: u32,
}

impl<F: NorFlash> FlashFile<F> {
    /// Mounts the file in `[base, base + region_len)`. An empty region gets a
    /// fresh `header`, a region holding anything else is reformatted.
    pub fn mount(flash: F, base: u32, region_len: u32, header: &[u8]) -> Result<Self, FlashFileError<F::Error>> {
        if F::WRITE_SIZE != 1 || F::READ_SIZE != 1 {
            return Err(FlashFileError::UnsupportedGranularity);
        }

        let sector = F::ERASE_SIZE as u32;
        if region_len == 0 || base % sector != 0 || region_len % sector != 0 {
            return Err(FlashFileError::Misaligned);
        }

        let Some(end) = base.checked_add(region_len) else {
            return Err(FlashFileError::OutOfBounds);
        };
        if end as usize > flash.capacity() {
            return Err(FlashFileError::OutOfBounds);
        }
        if header.len() > region_len as usize {
            return Err(FlashFileError::RegionFull);
        }

        let mut file = Self {
            flash,
            base,
            region_len,
            len: 0,
        };
        file.len = file.scan_end()?;

        if !file.erased_from(file.len)? {
            log::warn!("log region has stale data past {} bytes, erasing", file.len);
            file.format(region_len, header)?;
        }
        else if file.len == 0 {
            log::info!("log region empty, creating file with header");
            file.program(header)?;
        }
        else if !file.starts_with(header)? {
            log::warn!("log region holds foreign data, reformatting");
            file.rewrite(header)?;
        }
        else {
            log::info!("log file mounted, {} bytes", file.len);
        }

        Ok(file)
    }

    pub fn release(self) -> F {
        self.flash
    }

    fn scan_end(&mut self) -> Result<u32, FlashFileError<F::Error>> {
        let mut buf = [0u8; SCAN_CHUNK];
        let mut offset: u32 = 0;

        while offset < self.region_len {
            let n = min(SCAN_CHUNK as u32, self.region_len - offset) as usize;
            self.flash
                .read(self.base + offset, &mut buf[..n])
                .map_err(FlashFileError::Flash)?;

            if let Some(pos) = buf[..n].iter().position(|&b| b == ERASED) {
                return Ok(offset + pos as u32);
            }
            offset += n as u32;
        }

        Ok(self.region_len)
    }

    fn erased_from(&mut self, start: u32) -> Result<bool, FlashFileError<F::Error>> {
        let mut buf = [0u8; SCAN_CHUNK];
        let mut offset = start;

        while offset < self.region_len {
            let n = min(SCAN_CHUNK as u32, self.region_len - offset) as usize;
            self.flash
                .read(self.base + offset, &mut buf[..n])
                .map_err(FlashFileError::Flash)?;

            if buf[..n].iter().any(|&b| b != ERASED) {
                return Ok(false);
            }
            offset += n as u32;
        }

        Ok(true)
    }

    fn starts_with(&mut self, expected: &[u8]) -> Result<bool, FlashFileError<F::Error>> {
        if (self.len as usize) < expected.len() {
            return Ok(false);
        }

        let mut buf = [0u8; SCAN_CHUNK];
        for (index, part) in expected.chunks(SCAN_CHUNK).enumerate() {
            let offset = (index * SCAN_CHUNK) as u32;
            self.flash
                .read(self.base + offset, &mut buf[..part.len()])
                .map_err(FlashFileError::Flash)?;
            if &buf[..part.len()] != part {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn program(&mut self, bytes: &[u8]) -> Result<(), FlashFileError<F::Error>> {
        if self.len as usize + bytes.len() > self.region_len as usize {
            return Err(FlashFileError::RegionFull);
        }

        let start = self.len;
        if let Err(e) = self.flash.write(self.base + start, bytes) {
            self.resync();
            if self.len > start {
                self.close_torn_line();
            }
            return Err(FlashFileError::Flash(e));
        }

        self.len += bytes.len() as u32;
        Ok(())
    }

    fn close_torn_line(&mut self) {
        let mut last = [0u8; 1];
        if self.flash.read(self.base + self.len - 1, &mut last).is_err() || last[0] == b'\n' {
            return;
        }
        if self.len >= self.region_len {
            log::warn!("torn line at region end left open");
            return;
        }

        match self.flash.write(self.base + self.len, b"\n") {
            Ok(()) => { self.len += 1; },
            Err(e) => {
                log::error!("closing torn line failed: {:?}", e);
                self.resync();
            },
        }
    }

    fn rewrite(&mut self, header: &[u8]) -> Result<(), FlashFileError<F::Error>> {
        self.format(self.len, header)
    }

    /// Erases every sector touching `[base, base + dirty)` and writes `header`.
    fn format(&mut self, dirty: u32, header: &[u8]) -> Result<(), FlashFileError<F::Error>> {
        let sector = F::ERASE_SIZE as u32;
        let used = dirty.max(1).div_ceil(sector) * sector;
        let span = min(used, self.region_len);

        if let Err(e) = self.flash.erase(self.base, self.base + span) {
            self.resync();
            return Err(FlashFileError::Flash(e));
        }

        self.len = 0;
        self.program(header)
    }

    fn resync(&mut self) {
        match self.scan_end() {
            Ok(len) => { self.len = len; },
            Err(e) => { log::error!("log region rescan failed: {:?}", e); },
        }
    }
}

impl<F: NorFlash> LogFile for FlashFile<F> {
    type Error = FlashFileError<F::Error>;

    fn size(&mut self) -> Result<usize, Self::Error> {
        Ok(self.len as usize)
    }

    fn append(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.program(bytes)
    }

    fn read_at(&mut self, offset: usize, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let len = self.len as usize;
        if offset >= len {
            return Ok(0);
        }

        let n = min(buf.len(), len - offset);
        self.flash
            .read(self.base + offset as u32, &mut buf[..n])
            .map_err(FlashFileError::Flash)?;
        Ok(n)
    }

    fn truncate_with_header(&mut self, header: &[u8]) -> Result<(), Self::Error> {
        self.rewrite(header)
    }

    fn usage(&self) -> FsUsage {
        FsUsage {
            total_bytes: self.region_len as usize,
            used_bytes: self.len as usize,
        }
    }
}

/* --------------------------- Tests -------------------------- */
