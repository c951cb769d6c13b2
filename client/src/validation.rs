//! Guest module validation — ABI compatibility checks.
//!
//! Validates a compiled module against the guest ABI before instantiation:
//!
//! 1. Required function exports present with all-i32 signatures
//! 2. A `memory` export present
//! 3. Every import satisfiable by the WASI system-interface shim
//!
//! Failing early here turns a missing or misdeclared export into a precise
//! instantiation error instead of a lookup failure mid-operation.

use anyhow::anyhow;
use wasmtime::{ExternType, Module, ValType};

use miden_abi::exports::{MEMORY, REQUIRED_EXPORTS};

use crate::error::ClientError;

/// Import namespaces the shim can satisfy.
const WASI_MODULE_PREFIX: &str = "wasi";

/// Validate that a compiled module satisfies the guest ABI.
pub fn validate_module(module: &Module) -> Result<(), ClientError> {
    validate_exports(module)?;
    validate_imports(module)?;
    Ok(())
}

fn validate_exports(module: &Module) -> Result<(), ClientError> {
    let has_memory = module
        .exports()
        .any(|e| e.name() == MEMORY && matches!(e.ty(), ExternType::Memory(_)));
    if !has_memory {
        return Err(ClientError::Instantiate(anyhow!(
            "module must export '{MEMORY}'"
        )));
    }

    for &(name, expected_params, expected_results) in REQUIRED_EXPORTS {
        let export = module.exports().find(|e| e.name() == name).ok_or_else(|| {
            ClientError::Instantiate(anyhow!("missing required export: {name}"))
        })?;

        let func_ty = match export.ty() {
            ExternType::Func(ft) => ft,
            _ => {
                return Err(ClientError::Instantiate(anyhow!(
                    "export '{name}' must be a function"
                )));
            }
        };

        // All pointers and lengths cross the boundary as i32.
        let params: Vec<ValType> = func_ty.params().collect();
        let results: Vec<ValType> = func_ty.results().collect();

        if params.len() != expected_params || !params.iter().all(|vt| matches!(vt, ValType::I32)) {
            return Err(ClientError::Instantiate(anyhow!(
                "export '{name}' has wrong param signature: expected {expected_params} i32 params, got {}",
                params.len()
            )));
        }
        if results.len() != expected_results
            || !results.iter().all(|vt| matches!(vt, ValType::I32))
        {
            return Err(ClientError::Instantiate(anyhow!(
                "export '{name}' has wrong result signature: expected {expected_results} i32 results, got {}",
                results.len()
            )));
        }
    }

    Ok(())
}

fn validate_imports(module: &Module) -> Result<(), ClientError> {
    for import in module.imports() {
        let module_name = import.module();
        if !module_name.starts_with(WASI_MODULE_PREFIX) {
            return Err(ClientError::Instantiate(anyhow!(
                "import from module '{}' cannot be satisfied by the system-interface shim: {}",
                module_name,
                import.name()
            )));
        }
    }
    Ok(())
}
