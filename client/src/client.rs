//! The binding facade — the public entry point.
//!
//! `MidenClient` owns at most one guest instance and exposes the five guest
//! operations as uniform encode → invoke → decode calls. Initialization is
//! lazy and single-flight; operations are serialized end-to-end; a guest
//! trap parks the facade in a fault state until `destroy()`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;

use miden_abi::{
    AccountInfo, AccountState, ContractReceipt, Operation, ProofReceipt, TransactionReceipt,
};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::instance::GuestInstance;
use crate::{loader, marshal};

/// Lifecycle of the facade's guest instance.
///
/// There is no `Initializing` variant: initialization happens with the
/// state lock held, so concurrent first callers await the one in-flight
/// result instead of observing an intermediate state.
enum Lifecycle {
    /// No instance exists yet.
    Uninitialized,
    /// The single live instance; all operations are invokable.
    Ready(Box<GuestInstance>),
    /// Instance released by `destroy()`; the next call re-initializes.
    Destroyed,
    /// A guest call trapped; only `destroy()` leaves this state.
    Faulted,
}

/// Async bindings over the compiled Miden client module.
///
/// One facade owns at most one guest instance. Operations issued
/// concurrently against the same facade are executed one at a time, in
/// arrival order at the internal lock; interleaving them would let one
/// operation's allocation invalidate another's pointers.
pub struct MidenClient {
    config: ClientConfig,
    state: Mutex<Lifecycle>,
}

impl MidenClient {
    /// Create a client using the default module artifact location.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client for a specific module artifact.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            state: Mutex::new(Lifecycle::Uninitialized),
        }
    }

    /// Eagerly load and instantiate the guest module.
    ///
    /// Idempotent: a ready client is left untouched. Calling this is
    /// optional, since every operation initializes lazily on first use.
    pub async fn initialize(&self) -> Result<(), ClientError> {
        let mut lifecycle = self.state.lock().await;
        Self::ensure_ready(&mut lifecycle, &self.config).await
    }

    /// Whether a live guest instance currently exists.
    pub async fn is_initialized(&self) -> bool {
        matches!(*self.state.lock().await, Lifecycle::Ready(_))
    }

    /// Create a new account from JSON parameters.
    pub async fn create_account(&self, params: &Value) -> Result<AccountInfo, ClientError> {
        self.perform(Operation::CreateAccount, params.to_string())
            .await
    }

    /// Execute a transaction described by a JSON value.
    pub async fn execute_transaction(
        &self,
        transaction: &Value,
    ) -> Result<TransactionReceipt, ClientError> {
        self.perform(Operation::ExecuteTransaction, transaction.to_string())
            .await
    }

    /// Fetch the state of an account.
    ///
    /// The identifier is a bare string handed to the guest unchanged, not
    /// wrapped in JSON.
    pub async fn get_account_state(&self, account_id: &str) -> Result<AccountState, ClientError> {
        self.perform(Operation::GetAccountState, account_id.to_owned())
            .await
    }

    /// Submit a proof described by a JSON value.
    pub async fn submit_proof(&self, proof: &Value) -> Result<ProofReceipt, ClientError> {
        self.perform(Operation::SubmitProof, proof.to_string())
            .await
    }

    /// Deploy a contract described by a JSON value.
    pub async fn deploy_contract(&self, contract: &Value) -> Result<ContractReceipt, ClientError> {
        self.perform(Operation::DeployContract, contract.to_string())
            .await
    }

    /// Release the guest instance and its system-interface shim.
    ///
    /// No guest-side cleanup call is issued; memory reclamation is whatever
    /// the guest's own teardown provides. The facade is reusable afterwards:
    /// the next operation instantiates a fresh guest.
    pub async fn destroy(&self) {
        let mut lifecycle = self.state.lock().await;
        if matches!(*lifecycle, Lifecycle::Ready(_) | Lifecycle::Faulted) {
            tracing::debug!("releasing guest instance");
        }
        *lifecycle = Lifecycle::Destroyed;
    }

    /// The uniform operation pipeline: ensure ready, write the input into
    /// guest memory, invoke the export, read back and parse the result.
    ///
    /// The state lock spans the whole sequence: pointers are only valid
    /// until the next allocation, so two operations must never interleave
    /// against one instance.
    async fn perform<T: DeserializeOwned>(
        &self,
        op: Operation,
        input: String,
    ) -> Result<T, ClientError> {
        let mut lifecycle = self.state.lock().await;
        Self::ensure_ready(&mut lifecycle, &self.config).await?;
        // ensure_ready leaves the lifecycle Ready on success.
        let Lifecycle::Ready(instance) = &mut *lifecycle else {
            return Err(ClientError::Faulted);
        };

        let outcome = dispatch(instance, op, &input);
        if matches!(outcome, Err(ClientError::GuestTrap { .. })) {
            tracing::warn!(operation = %op, "guest trapped; instance faulted until destroy()");
            *lifecycle = Lifecycle::Faulted;
        }
        let text = outcome?;

        serde_json::from_str(&text).map_err(|source| ClientError::Protocol {
            export: op.export_name(),
            source,
        })
    }

    async fn ensure_ready(
        lifecycle: &mut Lifecycle,
        config: &ClientConfig,
    ) -> Result<(), ClientError> {
        match lifecycle {
            Lifecycle::Ready(_) => Ok(()),
            Lifecycle::Faulted => Err(ClientError::Faulted),
            Lifecycle::Uninitialized | Lifecycle::Destroyed => {
                tracing::info!(
                    path = %config.module_path.display(),
                    "initializing guest instance"
                );
                // On failure the lifecycle is left as-is, so a later call
                // retries initialization from scratch.
                let instance = loader::initialize(config).await?;
                *lifecycle = Lifecycle::Ready(Box::new(instance));
                Ok(())
            }
        }
    }
}

impl Default for MidenClient {
    fn default() -> Self {
        Self::new()
    }
}

/// One operation against a ready instance: write → invoke → read.
fn dispatch(
    instance: &mut GuestInstance,
    op: Operation,
    input: &str,
) -> Result<String, ClientError> {
    let ptr = marshal::write_str(instance, input)?;
    let result_ptr = instance.invoke(op, ptr)?;
    marshal::read_str(instance, result_ptr)
}
