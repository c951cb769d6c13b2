//! Memory marshaling across the host/guest boundary.
//!
//! Inputs travel host → guest through the guest's own allocator: encode as
//! UTF-8, `alloc` a buffer, copy, fire the `write_to_buffer` hook. Results
//! travel guest → host as NUL-terminated UTF-8 buffers, so no length channel
//! is needed on the way back.
//!
//! A pointer is only valid against the memory view taken after the
//! allocation that produced it; both functions re-derive their view from the
//! instance instead of holding one across guest calls.

use crate::error::{ClientError, MarshalError};
use crate::instance::GuestInstance;

/// Encode `text` into guest memory and return the guest pointer to it.
///
/// On success the byte range `[ptr, ptr + text.len())` in guest memory holds
/// exactly the UTF-8 encoding of `text`. The buffer is guest-owned and never
/// freed by the host. On failure nothing has been written.
pub fn write_str(instance: &mut GuestInstance, text: &str) -> Result<u32, ClientError> {
    let bytes = text.as_bytes();
    let len = u32::try_from(bytes.len())
        .map_err(|_| MarshalError::InputTooLarge { len: bytes.len() })?;

    let ptr = instance.alloc(len)?;
    if ptr == 0 {
        return Err(MarshalError::AllocFailed { len: bytes.len() }.into());
    }

    // The allocation may have grown memory, so take the view only now.
    let mem = instance.memory_data_mut();
    let start = ptr as usize;
    let end = start
        .checked_add(bytes.len())
        .filter(|&end| end <= mem.len())
        .ok_or(MarshalError::OutOfBounds {
            ptr,
            len: bytes.len(),
            size: mem.len(),
        })?;
    mem[start..end].copy_from_slice(bytes);

    instance.notify_written(ptr, len)?;
    Ok(ptr)
}

/// Decode the NUL-terminated UTF-8 buffer at `ptr` in guest memory.
///
/// The scan is bounded by the current memory size; a result buffer the guest
/// forgot to terminate fails instead of running off the end.
pub fn read_str(instance: &GuestInstance, ptr: u32) -> Result<String, ClientError> {
    let mem = instance.memory_data();
    let start = ptr as usize;
    if start >= mem.len() {
        return Err(MarshalError::OutOfBounds {
            ptr,
            len: 0,
            size: mem.len(),
        }
        .into());
    }

    let terminator = mem[start..]
        .iter()
        .position(|&b| b == 0)
        .ok_or(MarshalError::MissingTerminator {
            ptr,
            scanned: mem.len() - start,
        })?;

    let text = std::str::from_utf8(&mem[start..start + terminator])
        .map_err(|source| MarshalError::InvalidUtf8 { ptr, source })?;
    Ok(text.to_owned())
}
