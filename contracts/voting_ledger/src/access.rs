//! Guards composed at the top of every mutating operation.
//!
//! Check order is fixed: not destroyed, then owner, then phase. Nothing in
//! here touches storage.

use soroban_sdk::{Address, Env};

use crate::errors::LedgerError;
use crate::types::{LedgerState, Phase};

pub fn require_not_destroyed(state: &LedgerState) -> Result<(), LedgerError> {
    if state.phase == Phase::Destroyed {
        return Err(LedgerError::AlreadyDestroyed);
    }
    Ok(())
}

/// The caller must authorize the invocation and be the current owner.
pub fn require_owner(state: &LedgerState, caller: &Address) -> Result<(), LedgerError> {
    caller.require_auth();
    if *caller != state.owner {
        return Err(LedgerError::PermissionDenied);
    }
    Ok(())
}

pub fn require_phase(state: &LedgerState, expected: Phase) -> Result<(), LedgerError> {
    if state.phase != expected {
        return Err(LedgerError::InvalidState);
    }
    Ok(())
}

/// Not destroyed and called by the owner.
pub fn require_admin(state: &LedgerState, caller: &Address) -> Result<(), LedgerError> {
    require_not_destroyed(state)?;
    require_owner(state, caller)
}

/// Rejects addresses that can never authorize a call as an administrator.
/// The ledger itself is the only such address.
pub fn validate_address(env: &Env, address: &Address) -> Result<(), LedgerError> {
    if *address == env.current_contract_address() {
        return Err(LedgerError::InvalidAddress);
    }
    Ok(())
}
