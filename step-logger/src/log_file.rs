/*
    Log File Interface
*/

use core::fmt::Debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FsUsage {
    pub total_bytes: usize,
    pub used_bytes: usize,
}

impl FsUsage {
    pub fn free_bytes(&self) -> usize {
        self.total_bytes.saturating_sub(self.used_bytes)
    }
}

/// Persistent, append-only text file. Every call completes the whole
/// operation; nothing stays open between calls.
pub trait LogFile {
    type Error: Debug;

    fn size(&mut self) -> Result<usize, Self::Error>;

    /// Appends all of `bytes` or nothing.
    fn append(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Reads from `offset` into `buf`, returns the byte count (0 at the end).
    fn read_at(&mut self, offset: usize, buf: &mut [u8]) -> Result<usize, Self::Error>;

    fn truncate_with_header(&mut self, header: &[u8]) -> Result<(), Self::Error>;

    fn usage(&self) -> FsUsage;
}
