//! Typed envelopes for operation results.
//!
//! The bindings do not validate domain semantics of the JSON the guest
//! returns; payload shapes are owned by the guest. Each operation still
//! gets its own envelope type so callers cannot confuse, say, an account
//! state with a transaction receipt, while the content stays an opaque
//! `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of `create_account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountInfo(pub Value);

/// Result of `execute_transaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionReceipt(pub Value);

/// Result of `get_account_state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountState(pub Value);

/// Result of `submit_proof`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofReceipt(pub Value);

/// Result of `deploy_contract`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractReceipt(pub Value);
