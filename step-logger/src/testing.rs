/*
    Test Doubles
*/

use crate::analog::AnalogInput;
use crate::analog::AnalogOutput;
use crate::console::Console;
use crate::log_file::FsUsage;
use crate::log_file::LogFile;

/* --------------------------- Analog -------------------------- */
#[derive(Default)]
pub struct RecordingOutput {
    pub codes: Vec<u16>,
}

impl RecordingOutput {
    pub fn last(&self) -> Option<u16> {
        self.codes.last().copied()
    }
}

impl AnalogOutput for RecordingOutput {
    fn write_code(&mut self, code: u16) {
        self.codes.push(code);
    }
}

/// Returns `raw` forever, or an error while `fail` is set.
pub struct FixedInput {
    pub raw: u16,
    pub fail: bool,
}

impl FixedInput {
    pub fn new(raw: u16) -> Self {
        Self { raw, fail: false }
    }
}

impl AnalogInput for FixedInput {
    type Error = ();

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        if self.fail {
            return Err(());
        }
        Ok(self.raw)
    }
}

/* --------------------------- Log File -------------------------- */
#[derive(Debug, PartialEq)]
pub struct MemFileError;

pub struct MemFile {
    pub bytes: Vec<u8>,
    pub total: usize,
    pub fail_append: bool,
    pub fail_read: bool,
    pub fail_truncate: bool,
}

impl MemFile {
    pub fn with_contents(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            total: 1 << 20,
            fail_append: false,
            fail_read: false,
            fail_truncate: false,
        }
    }

    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.bytes).unwrap()
    }
}

impl LogFile for MemFile {
    type Error = MemFileError;

    fn size(&mut self) -> Result<usize, Self::Error> {
        Ok(self.bytes.len())
    }

    fn append(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail_append {
            return Err(MemFileError);
        }
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    fn read_at(&mut self, offset: usize, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_read {
            return Err(MemFileError);
        }
        if offset >= self.bytes.len() {
            return Ok(0);
        }
        let n = buf.len().min(self.bytes.len() - offset);
        buf[..n].copy_from_slice(&self.bytes[offset..offset + n]);
        Ok(n)
    }

    fn truncate_with_header(&mut self, header: &[u8]) -> Result<(), Self::Error> {
        if self.fail_truncate {
            return Err(MemFileError);
        }
        self.bytes.clear();
        self.bytes.extend_from_slice(header);
        Ok(())
    }

    fn usage(&self) -> FsUsage {
        FsUsage { total_bytes: self.total, used_bytes: self.bytes.len() }
    }
}

/* --------------------------- Console -------------------------- */
#[derive(Default)]
pub struct Transcript {
    pub out: String,
}

impl Transcript {
    pub fn take(&mut self) -> String {
        core::mem::take(&mut self.out)
    }
}

impl Console for Transcript {
    async fn write(&mut self, bytes: &[u8]) {
        self.out.push_str(core::str::from_utf8(bytes).unwrap());
    }
}
