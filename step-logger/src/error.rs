/*
    Error Types
*/

use thiserror::Error;

/* --------------------------- Log Store -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("max file size reached")]
    CapacityExceeded,
    #[error("could not open file for writing")]
    AppendFailed,
    #[error("could not open file for reading")]
    ReadFailed,
    #[error("could not clear file")]
    ClearFailed,
}

/* --------------------------- Flash File -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FlashFileError<E> {
    #[error("log region is not sector aligned")]
    Misaligned,
    #[error("log region exceeds flash capacity")]
    OutOfBounds,
    #[error("flash needs byte granular read and write")]
    UnsupportedGranularity,
    #[error("log region is full")]
    RegionFull,
    #[error("flash access failed: {0:?}")]
    Flash(E),
}
