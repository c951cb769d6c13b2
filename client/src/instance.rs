//! The live guest instance and its export table.
//!
//! `GuestInstance` owns the Wasmtime store, the guest's linear memory
//! handle, and the typed export functions, resolved once at instantiation.
//! Exactly zero or one `GuestInstance` exists per facade at any time.
//!
//! Guest memory is an arena from the host's point of view: the host never
//! frees what `alloc` hands out, and whether the guest recycles buffers
//! between calls is its own business.

use wasmtime::{Instance, Store, TypedFunc};
use wasmtime_wasi::preview1::WasiP1Ctx;

use miden_abi::{exports, Operation};

use crate::error::ClientError;
use crate::shim::SystemShim;

/// A ready-to-call guest module instance.
///
/// Created by [`loader::instantiate`](crate::loader::instantiate). Dropping
/// it releases the store, the linear memory, and the system-interface shim.
pub struct GuestInstance {
    store: Store<WasiP1Ctx>,
    memory: wasmtime::Memory,
    alloc: TypedFunc<u32, u32>,
    write_to_buffer: TypedFunc<(u32, u32), ()>,
    create_account: TypedFunc<u32, u32>,
    execute_transaction: TypedFunc<u32, u32>,
    get_account_state: TypedFunc<u32, u32>,
    submit_proof: TypedFunc<u32, u32>,
    deploy_contract: TypedFunc<u32, u32>,
    _shim: SystemShim,
}

impl std::fmt::Debug for GuestInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestInstance").finish_non_exhaustive()
    }
}

impl GuestInstance {
    /// Resolve the export table of an already-instantiated module.
    ///
    /// Resolving typed funcs up front checks every signature once, so a
    /// per-call lookup can never fail later.
    pub(crate) fn resolve(
        mut store: Store<WasiP1Ctx>,
        instance: Instance,
        shim: SystemShim,
    ) -> Result<Self, ClientError> {
        let memory = instance
            .get_memory(&mut store, exports::MEMORY)
            .ok_or_else(|| {
                ClientError::Instantiate(anyhow::anyhow!(
                    "instance has no '{}' export",
                    exports::MEMORY
                ))
            })?;

        let alloc = instance
            .get_typed_func(&mut store, exports::ALLOC)
            .map_err(ClientError::Instantiate)?;
        let write_to_buffer = instance
            .get_typed_func(&mut store, exports::WRITE_TO_BUFFER)
            .map_err(ClientError::Instantiate)?;
        let create_account = instance
            .get_typed_func(&mut store, exports::CREATE_ACCOUNT)
            .map_err(ClientError::Instantiate)?;
        let execute_transaction = instance
            .get_typed_func(&mut store, exports::EXECUTE_TRANSACTION)
            .map_err(ClientError::Instantiate)?;
        let get_account_state = instance
            .get_typed_func(&mut store, exports::GET_ACCOUNT_STATE)
            .map_err(ClientError::Instantiate)?;
        let submit_proof = instance
            .get_typed_func(&mut store, exports::SUBMIT_PROOF)
            .map_err(ClientError::Instantiate)?;
        let deploy_contract = instance
            .get_typed_func(&mut store, exports::DEPLOY_CONTRACT)
            .map_err(ClientError::Instantiate)?;

        Ok(Self {
            store,
            memory,
            alloc,
            write_to_buffer,
            create_account,
            execute_transaction,
            get_account_state,
            submit_proof,
            deploy_contract,
            _shim: shim,
        })
    }

    /// Ask the guest allocator for `len` bytes of linear memory.
    pub(crate) fn alloc(&mut self, len: u32) -> Result<u32, ClientError> {
        self.alloc
            .call(&mut self.store, len)
            .map_err(|source| ClientError::GuestTrap {
                export: exports::ALLOC,
                source,
            })
    }

    /// Fire the guest's post-copy notification hook. Its return value, if
    /// any, is ignored by contract.
    pub(crate) fn notify_written(&mut self, ptr: u32, len: u32) -> Result<(), ClientError> {
        self.write_to_buffer
            .call(&mut self.store, (ptr, len))
            .map_err(|source| ClientError::GuestTrap {
                export: exports::WRITE_TO_BUFFER,
                source,
            })
    }

    /// Invoke one of the five operation exports with an input pointer.
    pub(crate) fn invoke(&mut self, op: Operation, ptr: u32) -> Result<u32, ClientError> {
        self.operation_func(op)
            .call(&mut self.store, ptr)
            .map_err(|source| ClientError::GuestTrap {
                export: op.export_name(),
                source,
            })
    }

    fn operation_func(&self, op: Operation) -> TypedFunc<u32, u32> {
        match op {
            Operation::CreateAccount => self.create_account.clone(),
            Operation::ExecuteTransaction => self.execute_transaction.clone(),
            Operation::GetAccountState => self.get_account_state.clone(),
            Operation::SubmitProof => self.submit_proof.clone(),
            Operation::DeployContract => self.deploy_contract.clone(),
        }
    }

    /// Current view of the guest's linear memory.
    ///
    /// Invalidated by any guest call that can grow memory; re-derive after
    /// every `alloc` rather than holding a view across calls.
    pub(crate) fn memory_data(&self) -> &[u8] {
        self.memory.data(&self.store)
    }

    /// Mutable view of the guest's linear memory. Same freshness rule as
    /// [`memory_data`](Self::memory_data).
    pub(crate) fn memory_data_mut(&mut self) -> &mut [u8] {
        self.memory.data_mut(&mut self.store)
    }
}
