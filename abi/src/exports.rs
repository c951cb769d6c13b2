//! Export names of the guest ABI.
//!
//! Every compiled guest module exposes a flat C-style surface: one allocator,
//! one post-write notification hook, five operation entry points, and a
//! single linear memory. All function parameters and results are i32 at the
//! wire level (pointers into linear memory).

/// Guest allocator: `(length: u32) -> ptr: u32`. Returns an offset to
/// `length` free bytes; `0` signals allocation failure.
pub const ALLOC: &str = "alloc";

/// Post-copy notification hook: `(ptr: u32, length: u32)`. Effect is
/// guest-defined and opaque to the host.
pub const WRITE_TO_BUFFER: &str = "write_to_buffer";

/// The guest's linear memory export.
pub const MEMORY: &str = "memory";

/// WASI command entry point, run once after instantiation when present.
pub const START: &str = "_start";

/// WASI reactor initializer, run once after instantiation when `_start`
/// is absent.
pub const INITIALIZE: &str = "_initialize";

pub const CREATE_ACCOUNT: &str = "create_account";
pub const EXECUTE_TRANSACTION: &str = "execute_transaction";
pub const GET_ACCOUNT_STATE: &str = "get_account_state";
pub const SUBMIT_PROOF: &str = "submit_proof";
pub const DEPLOY_CONTRACT: &str = "deploy_contract";

/// Required function exports: (name, i32 param count, i32 result count).
///
/// `memory` is required too but is not a function and is checked separately.
/// The entry points (`_start`/`_initialize`) are optional.
pub const REQUIRED_EXPORTS: &[(&str, usize, usize)] = &[
    (ALLOC, 1, 1),
    (WRITE_TO_BUFFER, 2, 0),
    (CREATE_ACCOUNT, 1, 1),
    (EXECUTE_TRANSACTION, 1, 1),
    (GET_ACCOUNT_STATE, 1, 1),
    (SUBMIT_PROOF, 1, 1),
    (DEPLOY_CONTRACT, 1, 1),
];
