//! System-interface shim supplied to the guest at instantiation.
//!
//! The guest expects WASI preview1 system services. The shim hands it empty
//! process arguments, an empty environment, and a throwaway scratch
//! directory preopened as the filesystem root. One shim is created per
//! instantiation and owned by the resulting instance; dropping the instance
//! removes the scratch directory.

use anyhow::Context as _;
use tempfile::TempDir;
use wasmtime_wasi::preview1::WasiP1Ctx;
use wasmtime_wasi::{DirPerms, FilePerms, WasiCtxBuilder};

use crate::error::ClientError;

/// Host-supplied system services for one guest instance.
pub struct SystemShim {
    workdir: TempDir,
}

impl SystemShim {
    /// Create a shim with a fresh scratch directory.
    pub fn new() -> Result<Self, ClientError> {
        let workdir = TempDir::new()
            .context("creating system-interface scratch directory")
            .map_err(ClientError::Instantiate)?;
        Ok(Self { workdir })
    }

    /// Build the WASI context handed to the store.
    ///
    /// Args and env default to empty; the guest sees only the scratch root.
    pub(crate) fn build_ctx(&self) -> Result<WasiP1Ctx, ClientError> {
        let mut builder = WasiCtxBuilder::new();
        builder
            .preopened_dir(self.workdir.path(), "/", DirPerms::all(), FilePerms::all())
            .context("preopening shim filesystem root")
            .map_err(ClientError::Instantiate)?;
        Ok(builder.build_p1())
    }
}
