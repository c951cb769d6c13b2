//! Shared test helpers for integration tests.
//!
//! Provides WAT stub guests implementing the full guest ABI with canned,
//! deterministic behavior, and a factory that writes a stub artifact to a
//! scratch directory and points a `MidenClient` at it.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use miden_client::{ClientConfig, MidenClient};

// ── Stub Guests ──
//
// Every stub exposes the full guest ABI. The bump allocators start above
// the data segments and pad each allocation by 16 zero bytes, keeping every
// written buffer NUL-terminated even with a neighbor right behind it; the
// growing variants add a page per allocation so pointer-freshness is
// exercised on every write.

/// The canned guest: fixed NUL-terminated JSON results per operation, and
/// `execute_transaction` echoing its input pointer back (the bump region
/// past the input is zeroed, terminating it).
pub const STUB_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (data (i32.const 0) "{\22id\22:\22acc-1\22,\22balance\22:0}\00")
        (data (i32.const 32) "{\22id\22:\22acc-1\22,\22nonce\22:7}\00")
        (data (i32.const 64) "{\22status\22:\22accepted\22}\00")
        (data (i32.const 96) "{\22deployed\22:true}\00")
        (global $bump (mut i32) (i32.const 4096))
        (func (export "alloc") (param $len i32) (result i32)
            (local $ptr i32)
            (drop (memory.grow (i32.const 1)))
            global.get $bump
            local.set $ptr
            global.get $bump
            local.get $len
            i32.add
            i32.const 16
            i32.add
            global.set $bump
            local.get $ptr)
        (func (export "write_to_buffer") (param i32 i32))
        (func (export "create_account") (param i32) (result i32) i32.const 0)
        (func (export "execute_transaction") (param i32) (result i32) local.get 0)
        (func (export "get_account_state") (param i32) (result i32) i32.const 32)
        (func (export "submit_proof") (param i32) (result i32) i32.const 64)
        (func (export "deploy_contract") (param i32) (result i32) i32.const 96)
    )
"#;

/// Counts `create_account` calls per instance: the first returns
/// `{"seq":1}`, every later one `{"seq":2}`. A fresh instantiation resets
/// the counter, which is what lifecycle tests observe.
pub const COUNTING_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (data (i32.const 0) "{\22seq\22:1}\00")
        (data (i32.const 16) "{\22seq\22:2}\00")
        (global $bump (mut i32) (i32.const 4096))
        (global $calls (mut i32) (i32.const 0))
        (func (export "alloc") (param $len i32) (result i32)
            (local $ptr i32)
            (drop (memory.grow (i32.const 1)))
            global.get $bump
            local.set $ptr
            global.get $bump
            local.get $len
            i32.add
            i32.const 16
            i32.add
            global.set $bump
            local.get $ptr)
        (func (export "write_to_buffer") (param i32 i32))
        (func (export "create_account") (param i32) (result i32)
            global.get $calls
            i32.const 1
            i32.add
            global.set $calls
            (select (i32.const 0) (i32.const 16)
                (i32.eq (global.get $calls) (i32.const 1))))
        (func (export "execute_transaction") (param i32) (result i32) local.get 0)
        (func (export "get_account_state") (param i32) (result i32) i32.const 0)
        (func (export "submit_proof") (param i32) (result i32) i32.const 0)
        (func (export "deploy_contract") (param i32) (result i32) i32.const 0)
    )
"#;

/// `create_account` traps; every other operation echoes.
pub const TRAPPING_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (global $bump (mut i32) (i32.const 4096))
        (func (export "alloc") (param $len i32) (result i32)
            (local $ptr i32)
            global.get $bump
            local.set $ptr
            global.get $bump
            local.get $len
            i32.add
            global.set $bump
            local.get $ptr)
        (func (export "write_to_buffer") (param i32 i32))
        (func (export "create_account") (param i32) (result i32) unreachable)
        (func (export "execute_transaction") (param i32) (result i32) local.get 0)
        (func (export "get_account_state") (param i32) (result i32) local.get 0)
        (func (export "submit_proof") (param i32) (result i32) local.get 0)
        (func (export "deploy_contract") (param i32) (result i32) local.get 0)
    )
"#;

/// `create_account` returns a NUL-terminated buffer that is not JSON.
pub const NON_JSON_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (data (i32.const 0) "abc\00")
        (global $bump (mut i32) (i32.const 4096))
        (func (export "alloc") (param $len i32) (result i32)
            (local $ptr i32)
            global.get $bump
            local.set $ptr
            global.get $bump
            local.get $len
            i32.add
            global.set $bump
            local.get $ptr)
        (func (export "write_to_buffer") (param i32 i32))
        (func (export "create_account") (param i32) (result i32) i32.const 0)
        (func (export "execute_transaction") (param i32) (result i32) i32.const 0)
        (func (export "get_account_state") (param i32) (result i32) i32.const 0)
        (func (export "submit_proof") (param i32) (result i32) i32.const 0)
        (func (export "deploy_contract") (param i32) (result i32) i32.const 0)
    )
"#;

/// `get_account_state` points at nonzero bytes running to the end of
/// memory, no terminator anywhere in bounds. The allocator must not grow
/// memory, or the grown (zeroed) pages would terminate the scan.
pub const UNTERMINATED_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (data (i32.const 65530) "ABCDEF")
        (global $bump (mut i32) (i32.const 4096))
        (func (export "alloc") (param $len i32) (result i32)
            (local $ptr i32)
            global.get $bump
            local.set $ptr
            global.get $bump
            local.get $len
            i32.add
            global.set $bump
            local.get $ptr)
        (func (export "write_to_buffer") (param i32 i32))
        (func (export "create_account") (param i32) (result i32) i32.const 0)
        (func (export "execute_transaction") (param i32) (result i32) i32.const 0)
        (func (export "get_account_state") (param i32) (result i32) i32.const 65530)
        (func (export "submit_proof") (param i32) (result i32) i32.const 0)
        (func (export "deploy_contract") (param i32) (result i32) i32.const 0)
    )
"#;

/// Allocator that always returns the null failure sentinel.
pub const NULL_ALLOC_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (func (export "alloc") (param i32) (result i32) i32.const 0)
        (func (export "write_to_buffer") (param i32 i32))
        (func (export "create_account") (param i32) (result i32) i32.const 0)
        (func (export "execute_transaction") (param i32) (result i32) i32.const 0)
        (func (export "get_account_state") (param i32) (result i32) i32.const 0)
        (func (export "submit_proof") (param i32) (result i32) i32.const 0)
        (func (export "deploy_contract") (param i32) (result i32) i32.const 0)
    )
"#;

/// A module missing most of the operation exports.
pub const MISSING_EXPORTS_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (func (export "alloc") (param i32) (result i32) i32.const 16)
        (func (export "write_to_buffer") (param i32 i32))
        (func (export "create_account") (param i32) (result i32) i32.const 0)
    )
"#;

// ── Client Factories ──

/// Write a stub artifact into a scratch directory and return a client
/// pointed at it. Keep the `TempDir` alive for the client's lifetime.
pub fn stub_client(wat: &str) -> (MidenClient, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = write_stub_artifact(&dir, wat);
    (MidenClient::with_config(ClientConfig::with_module_path(path)), dir)
}

/// Write a stub artifact (WAT text; the runtime compiles it directly)
/// under `dir` and return its path.
pub fn write_stub_artifact(dir: &TempDir, wat: &str) -> PathBuf {
    let path = dir.path().join("miden_client.wasm");
    std::fs::write(&path, wat).unwrap();
    path
}
