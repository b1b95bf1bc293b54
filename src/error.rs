//! Crate error type

/// Errors the core pipeline may raise.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("input contains the reserved sentinel byte 0x00")]
    InputContainsSentinel,
    #[error("corrupt BWT stream: original_index out of range or empty input")]
    CorruptBwtStream,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
