//! Command dispatcher
//!
//! A closed command table executed against one device instance. The
//! dispatcher holds no lock of its own: the underlying components are
//! individually safe, availability is gated by the open/release count, and
//! commands from concurrent callers may interleave: a documented boundary,
//! not a serialization contract.

use platform::clock::ClockGate;
use platform::input::KeyReporter;
use platform::node::DeviceNode;
use platform::pinctrl::PinControl;

use crate::device::FpDevice;
use crate::error::CtlError;
use crate::keys::{KeyEvent, KEY_EVENT_SIZE};
use crate::{DRIVER_VERSION, VERSION_BUF_LEN};

/// Stable command opcodes expected by callers.
pub mod opcode {
    /// Reserved multi-instance init; no-op in this build.
    pub const INIT_DRIVER: u32 = 0;
    /// Reserved multi-instance deinit; no-op in this build.
    pub const DEINIT_DRIVER: u32 = 1;
    /// Run the reset pulse sequence.
    pub const RESET_DEVICE: u32 = 2;
    /// Inert stub; returns success without effect.
    pub const ENABLE_IRQ: u32 = 3;
    /// Inert stub; returns success without effect.
    pub const DISABLE_IRQ: u32 = 4;
    /// Reserved multi-instance interrupt request; no-op in this build.
    pub const REQUEST_IRQ: u32 = 5;
    /// Enable the transport peripheral clock.
    pub const ENABLE_SPI_CLK: u32 = 6;
    /// Disable the transport peripheral clock.
    pub const DISABLE_SPI_CLK: u32 = 7;
    /// Reserved; no-op in this build.
    pub const ENABLE_POWER: u32 = 8;
    /// Reserved; no-op in this build.
    pub const DISABLE_POWER: u32 = 9;
    /// Inject a key event; payload is the 8-byte key-event wire form.
    pub const REPORT_KEY_EVENT: u32 = 10;
    /// Reserved; no-op in this build.
    pub const SYNC_CONFIG: u32 = 11;
    /// Copy the null-terminated version string to the caller.
    pub const GET_VERSION: u32 = 12;
}

/// Failed payload transfer across the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XferFault;

/// Copies command payloads between the caller's and the driver's memory.
///
/// A failed copy aborts the command with [`CtlError::Fault`] before any side
/// effect.
pub trait PayloadXfer {
    /// Fill `buf` from the caller's payload.
    fn copy_in(&mut self, buf: &mut [u8]) -> Result<(), XferFault>;

    /// Write `data` back to the caller.
    fn copy_out(&mut self, data: &[u8]) -> Result<(), XferFault>;
}

/// In-process transfer backed by a caller-owned byte slice.
pub struct SliceXfer<'a> {
    buf: &'a mut [u8],
}

impl<'a> SliceXfer<'a> {
    /// Wrap the caller's buffer.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf }
    }
}

impl PayloadXfer for SliceXfer<'_> {
    fn copy_in(&mut self, buf: &mut [u8]) -> Result<(), XferFault> {
        let src = self.buf.get(..buf.len()).ok_or(XferFault)?;
        buf.copy_from_slice(src);
        Ok(())
    }

    fn copy_out(&mut self, data: &[u8]) -> Result<(), XferFault> {
        let dst = self.buf.get_mut(..data.len()).ok_or(XferFault)?;
        dst.copy_from_slice(data);
        Ok(())
    }
}

/// Version string in its fixed transfer form, null-terminated within the
/// buffer even when the string fills it.
pub fn version_buffer() -> [u8; VERSION_BUF_LEN] {
    let mut buf = [0u8; VERSION_BUF_LEN];
    for (dst, src) in buf.iter_mut().zip(DRIVER_VERSION.bytes()) {
        *dst = src;
    }
    if let Some(last) = buf.last_mut() {
        *last = 0;
    }
    buf
}

impl<P: PinControl, R: KeyReporter, N: DeviceNode, C: ClockGate> FpDevice<P, R, N, C> {
    /// Dispatch one command.
    ///
    /// Unknown opcodes yield [`CtlError::InvalidArgument`] with zero side
    /// effects. Payload-carrying commands validate the transfer before
    /// acting.
    pub async fn ioctl<X: PayloadXfer>(&mut self, op: u32, xfer: &mut X) -> Result<(), CtlError> {
        match op {
            // Reserved for the multi-instance compatibility mode.
            opcode::INIT_DRIVER | opcode::DEINIT_DRIVER | opcode::REQUEST_IRQ => Ok(()),

            opcode::RESET_DEVICE => {
                // The pulse always runs to completion; its result is logged
                // and deliberately not surfaced to the caller.
                if self.reset().await.is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("reset command: pulse reported an error");
                }
                Ok(())
            }

            // Inert stubs kept for caller compatibility.
            opcode::ENABLE_IRQ | opcode::DISABLE_IRQ => Ok(()),

            opcode::ENABLE_SPI_CLK => self
                .clock_mut()
                .set_enabled(true)
                .map_err(|_err| CtlError::Io),
            opcode::DISABLE_SPI_CLK => self
                .clock_mut()
                .set_enabled(false)
                .map_err(|_err| CtlError::Io),

            // Reserved.
            opcode::ENABLE_POWER | opcode::DISABLE_POWER => Ok(()),

            opcode::REPORT_KEY_EVENT => {
                let mut raw = [0u8; KEY_EVENT_SIZE];
                xfer.copy_in(&mut raw).map_err(|_fault| CtlError::Fault)?;
                let event = KeyEvent::from_bytes(&raw);
                self.report_key(&event)
            }

            // Reserved.
            opcode::SYNC_CONFIG => Ok(()),

            opcode::GET_VERSION => xfer
                .copy_out(&version_buffer())
                .map_err(|_fault| CtlError::Fault),

            _ => Err(CtlError::InvalidArgument),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_buffer_is_null_terminated() {
        let buf = version_buffer();
        assert!(buf.contains(&0));
        assert_eq!(buf.last(), Some(&0));
    }

    #[test]
    fn version_buffer_carries_the_version_string() {
        let buf = version_buffer();
        let len = buf.iter().position(|&b| b == 0).expect("terminator");
        assert_eq!(&buf[..len], DRIVER_VERSION.as_bytes());
    }

    #[test]
    fn slice_xfer_rejects_short_buffers() {
        let mut short = [0u8; 2];
        let mut xfer = SliceXfer::new(&mut short);
        let mut payload = [0u8; KEY_EVENT_SIZE];
        assert_eq!(xfer.copy_in(&mut payload), Err(XferFault));
        assert_eq!(xfer.copy_out(&[0u8; KEY_EVENT_SIZE]), Err(XferFault));
    }
}
