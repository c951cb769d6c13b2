//! Guest module loading and instantiation.
//!
//! `load` reads the compiled artifact from storage; `instantiate` compiles
//! it, validates the ABI, links the WASI shim, and runs the guest's entry
//! sequence. `initialize` chains the two with a fresh shim, one call per
//! facade initialization.

use std::path::Path;

use wasmtime::{Engine, Instance, Linker, Module, Store};
use wasmtime_wasi::preview1::{self, WasiP1Ctx};
use wasmtime_wasi::I32Exit;

use miden_abi::exports;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::instance::GuestInstance;
use crate::shim::SystemShim;
use crate::validation::validate_module;

/// Read the module artifact from storage.
pub async fn load(path: &Path) -> Result<Vec<u8>, ClientError> {
    tracing::debug!(path = %path.display(), "loading guest module artifact");
    tokio::fs::read(path)
        .await
        .map_err(|source| ClientError::Load {
            path: path.to_owned(),
            source,
        })
}

/// Compile and instantiate a guest module against a system-interface shim.
///
/// The module is validated against the guest ABI before instantiation, and
/// its entry sequence (`_start`, or `_initialize` for reactor-style builds)
/// is run to completion before the instance is handed out.
pub fn instantiate(bytes: &[u8], shim: SystemShim) -> Result<GuestInstance, ClientError> {
    let engine = Engine::default();
    let module = Module::new(&engine, bytes).map_err(ClientError::Instantiate)?;
    validate_module(&module)?;

    let mut linker: Linker<WasiP1Ctx> = Linker::new(&engine);
    preview1::add_to_linker_sync(&mut linker, |ctx| ctx).map_err(ClientError::Instantiate)?;

    let mut store = Store::new(&engine, shim.build_ctx()?);
    let instance = linker
        .instantiate(&mut store, &module)
        .map_err(ClientError::Instantiate)?;

    run_entry_sequence(&mut store, &instance)?;
    tracing::debug!(size = bytes.len(), "guest module instantiated");

    GuestInstance::resolve(store, instance, shim)
}

/// Load the configured artifact and instantiate it with a fresh shim.
pub async fn initialize(config: &ClientConfig) -> Result<GuestInstance, ClientError> {
    let bytes = load(&config.module_path).await?;
    let shim = SystemShim::new()?;
    instantiate(&bytes, shim)
}

/// Run the guest's entry sequence, if the module format requires one.
///
/// A `_start` that exits cleanly via `proc_exit(0)` counts as a successful
/// start; any other trap during entry fails instantiation.
fn run_entry_sequence(
    store: &mut Store<WasiP1Ctx>,
    instance: &Instance,
) -> Result<(), ClientError> {
    if let Ok(start) = instance.get_typed_func::<(), ()>(&mut *store, exports::START) {
        tracing::debug!(entry = exports::START, "running guest entry sequence");
        return match start.call(&mut *store, ()) {
            Ok(()) => Ok(()),
            Err(trap) if matches!(trap.downcast_ref::<I32Exit>(), Some(I32Exit(0))) => Ok(()),
            Err(trap) => Err(ClientError::Instantiate(trap)),
        };
    }

    if let Ok(init) = instance.get_typed_func::<(), ()>(&mut *store, exports::INITIALIZE) {
        tracing::debug!(entry = exports::INITIALIZE, "running guest entry sequence");
        return init
            .call(&mut *store, ())
            .map_err(ClientError::Instantiate);
    }

    Ok(())
}
