//! `miden-abi` — guest ABI contract for the Miden WASM client bindings.
//!
//! This crate defines the interface every compiled `miden_client.wasm`
//! artifact must satisfy, independent of the runtime that hosts it:
//!
//! - `exports` — export name constants and the required-export signature table
//! - `Operation` — the five named guest operations the bindings expose
//! - payload envelopes — typed wrappers over the opaque JSON values each
//!   operation exchanges
//!
//! The bindings crate (`miden-client`) validates modules against this
//! contract before instantiation and dispatches on `Operation`.

pub mod exports;
pub mod operation;
pub mod payload;

// Re-export commonly used types at the crate root.
pub use operation::Operation;
pub use payload::{AccountInfo, AccountState, ContractReceipt, ProofReceipt, TransactionReceipt};
