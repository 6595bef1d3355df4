//! Control-core error type

use thiserror_no_std::Error;

/// Errors returned by the device control core.
///
/// Command-dispatch errors cross the caller boundary as a bare status; no
/// detail string accompanies them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CtlError {
    /// A named hardware node or pin state is missing.
    #[error("named hardware resource not found")]
    NotFound,
    /// The hardware resource is already held elsewhere.
    #[error("device busy or unavailable")]
    Busy,
    /// A hardware transaction failed.
    #[error("hardware transaction failed")]
    Io,
    /// Unknown opcode or malformed request.
    #[error("invalid argument")]
    InvalidArgument,
    /// A payload copy across the caller boundary failed.
    #[error("payload transfer fault")]
    Fault,
    /// Device allocation failed.
    #[error("out of memory")]
    NoMemory,
}
