//! Binding error types.
//!
//! `ClientError` is the crate-level error returned by every public
//! operation. `MarshalError` covers failures while moving bytes across the
//! host/guest memory boundary and is wrapped by `ClientError::Marshal`.

use std::path::PathBuf;

/// Top-level error type for the bindings crate.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Module artifact missing or unreadable.
    #[error("failed to load module artifact {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed module, unsupported ABI, entry-sequence failure, or shim
    /// setup failure. Initialization did not complete; a later call retries.
    #[error("failed to instantiate guest module: {0}")]
    Instantiate(#[source] anyhow::Error),

    /// Crossing the host/guest memory boundary failed.
    #[error("marshal error: {0}")]
    Marshal(#[from] MarshalError),

    /// The guest returned bytes that do not parse as the contracted JSON.
    #[error("guest export '{export}' returned malformed JSON: {source}")]
    Protocol {
        export: &'static str,
        source: serde_json::Error,
    },

    /// A guest export aborted or trapped mid-call. The instance is left in
    /// an unspecified state and the facade transitions to faulted.
    #[error("guest export '{export}' trapped: {source}")]
    GuestTrap {
        export: &'static str,
        source: anyhow::Error,
    },

    /// An earlier call trapped and the instance has not been destroyed yet.
    #[error("guest instance is faulted after a trap; call destroy() before reuse")]
    Faulted,
}

/// Errors raised by the memory marshaler.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    /// The input does not fit the `u32` length the guest allocator accepts.
    #[error("input of {len} bytes exceeds the guest allocator's u32 length")]
    InputTooLarge { len: usize },

    /// The guest allocator returned its null failure sentinel.
    #[error("guest allocator returned the null sentinel for a {len}-byte request")]
    AllocFailed { len: usize },

    /// A pointer/length pair falls outside the current linear memory.
    #[error("range [{ptr}, {ptr} + {len}) is outside guest memory of {size} bytes")]
    OutOfBounds { ptr: u32, len: usize, size: usize },

    /// No NUL byte between the result pointer and the end of linear memory.
    #[error("no NUL terminator within {scanned} bytes from offset {ptr}")]
    MissingTerminator { ptr: u32, scanned: usize },

    /// The result buffer is not valid UTF-8.
    #[error("result buffer at offset {ptr} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        ptr: u32,
        source: std::str::Utf8Error,
    },
}
