//! Client configuration.

use std::path::{Path, PathBuf};

/// Configuration for the bindings.
///
/// The single host-side option: where to find the compiled guest module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Filesystem path to the compiled `miden_client.wasm` artifact.
    pub module_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        // The artifact ships next to the bindings themselves.
        Self {
            module_path: Path::new(env!("CARGO_MANIFEST_DIR")).join("miden_client.wasm"),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at a specific module artifact.
    pub fn with_module_path(module_path: impl Into<PathBuf>) -> Self {
        Self {
            module_path: module_path.into(),
        }
    }
}
