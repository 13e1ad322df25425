/*
    Log Store

    Capacity-bounded CSV sink on top of a `LogFile`. The store does not own
    any run state; callers react to the returned `StoreError`.
*/

use crate::config::DUMP_CHUNK_SIZE;
use crate::config::LOG_HEADER;
use crate::console::Console;
use crate::error::StoreError;
use crate::log_file::FsUsage;
use crate::log_file::LogFile;
use crate::record::LogRecord;
use crate::say;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoreInfo {
    pub usage: FsUsage,
    pub file_size: usize,
    pub record_count: usize,
}

pub struct LogStore<F: LogFile> {
    file: Option<F>,
    max_file_size: usize,
}

impl<F: LogFile> LogStore<F> {
    /// `None` means the storage could not be mounted; every operation then
    /// reports `StoreError::Unavailable`.
    pub fn new(file: Option<F>, max_file_size: usize) -> Self {
        Self { file, max_file_size }
    }

    pub fn release(self) -> Option<F> {
        self.file
    }

    pub fn is_available(&self) -> bool {
        self.file.is_some()
    }

    fn file(&mut self) -> Result<&mut F, StoreError> {
        self.file.as_mut().ok_or(StoreError::Unavailable)
    }

    pub fn size(&mut self) -> Result<usize, StoreError> {
        self.file()?.size().map_err(|e| {
            log::error!("log file size failed: {:?}", e);
            StoreError::ReadFailed
        })
    }

    pub fn append(&mut self, record: &LogRecord) -> Result<(), StoreError> {
        let max_file_size = self.max_file_size;
        if self.size()? >= max_file_size {
            return Err(StoreError::CapacityExceeded);
        }

        let line = record.to_line().ok_or(StoreError::AppendFailed)?;
        self.file()?.append(line.as_bytes()).map_err(|e| {
            log::error!("log append failed: {:?}", e);
            StoreError::AppendFailed
        })
    }

    /// Truncates the log to its header. Clearing an already empty log is a
    /// no-op with the same result.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.file()?.truncate_with_header(LOG_HEADER.as_bytes()).map_err(|e| {
            log::error!("log truncate failed: {:?}", e);
            StoreError::ClearFailed
        })
    }

    /// Number of data lines, the header line excluded.
    pub fn count_records(&mut self) -> Result<usize, StoreError> {
        let file = self.file()?;
        let mut buf = [0u8; DUMP_CHUNK_SIZE];
        let mut offset = 0;
        let mut lines = 0;

        loop {
            let n = file.read_at(offset, &mut buf).map_err(|e| {
                log::error!("log read failed at {}: {:?}", offset, e);
                StoreError::ReadFailed
            })?;
            if n == 0 {
                break;
            }
            lines += buf[..n].iter().filter(|&&b| b == b'\n').count();
            offset += n;
        }

        Ok(lines.saturating_sub(1))
    }

    pub fn info(&mut self) -> Result<StoreInfo, StoreError> {
        let usage = self.file()?.usage();
        let file_size = self.size()?;
        let record_count = self.count_records()?;
        Ok(StoreInfo { usage, file_size, record_count })
    }

    /// Streams the whole file to the console between two banners. Returns
    /// the number of file bytes written.
    pub async fn dump<C: Console>(&mut self, console: &mut C) -> Result<usize, StoreError> {
        say!(console);
        say!(console, "========== FILE CONTENTS ==========");
        let result = self.stream(console).await;
        if result.is_err() {
            say!(console, "ERROR: Could not open file for reading");
        }
        say!(console, "====================================");
        say!(console);
        result
    }

    async fn stream<C: Console>(&mut self, console: &mut C) -> Result<usize, StoreError> {
        let file = self.file()?;
        let mut buf = [0u8; DUMP_CHUNK_SIZE];
        let mut offset = 0;

        loop {
            let n = file.read_at(offset, &mut buf).map_err(|e| {
                log::error!("log read failed at {}: {:?}", offset, e);
                StoreError::ReadFailed
            })?;
            if n == 0 {
                return Ok(offset);
            }
            console.write(&buf[..n]).await;
            offset += n;
        }
    }
}
