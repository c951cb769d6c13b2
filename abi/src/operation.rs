//! The named guest operations exposed by the bindings.

use std::fmt;

use crate::exports;

/// One of the five guest operations.
///
/// Every operation has the same wire shape, `(ptr: u32) -> resultPtr: u32`:
/// it consumes a UTF-8 input buffer and returns a NUL-terminated UTF-8
/// result buffer. Operations differ only in export name and in whether the
/// bindings JSON-encode the parameter (`GetAccountState` takes a bare
/// identifier string passed through unchanged).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateAccount,
    ExecuteTransaction,
    GetAccountState,
    SubmitProof,
    DeployContract,
}

impl Operation {
    /// All operations, in ABI table order.
    pub const ALL: [Operation; 5] = [
        Operation::CreateAccount,
        Operation::ExecuteTransaction,
        Operation::GetAccountState,
        Operation::SubmitProof,
        Operation::DeployContract,
    ];

    /// The guest export this operation dispatches to.
    pub const fn export_name(self) -> &'static str {
        match self {
            Operation::CreateAccount => exports::CREATE_ACCOUNT,
            Operation::ExecuteTransaction => exports::EXECUTE_TRANSACTION,
            Operation::GetAccountState => exports::GET_ACCOUNT_STATE,
            Operation::SubmitProof => exports::SUBMIT_PROOF,
            Operation::DeployContract => exports::DEPLOY_CONTRACT,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.export_name())
    }
}
