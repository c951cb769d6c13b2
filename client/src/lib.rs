//! `miden-client` — host-side async bindings for the Miden WASM client.
//!
//! Loads the compiled `miden_client.wasm` module and exposes its operations
//! (create account, execute transaction, get account state, submit proof,
//! deploy contract) as async JSON-in/JSON-out calls. The crate guarantees:
//!
//! - **One instance per facade:** at most one live guest instance exists per
//!   [`MidenClient`], created lazily on first use and single-flight under
//!   concurrent first calls
//! - **Serialized operations:** each call holds the instance for its entire
//!   encode → invoke → decode sequence, so allocations from one operation
//!   can never invalidate another's pointers
//! - **Bounded marshaling:** result buffers are NUL-terminated by guest
//!   contract; reads never scan past the current memory size
//! - **Explicit fault state:** a guest trap parks the facade until
//!   [`destroy()`](MidenClient::destroy), never silently reusing a possibly
//!   corrupt instance
//!
//! The primary entry point is [`MidenClient`].

pub mod client;
pub mod config;
pub mod error;
pub mod instance;
pub mod loader;
pub mod marshal;
pub mod shim;
pub mod validation;

pub use client::MidenClient;
pub use config::ClientConfig;
pub use error::{ClientError, MarshalError};
pub use instance::GuestInstance;
pub use shim::SystemShim;

// The ABI contract types callers see in signatures.
pub use miden_abi::{
    AccountInfo, AccountState, ContractReceipt, Operation, ProofReceipt, TransactionReceipt,
};
