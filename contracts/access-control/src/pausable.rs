use soroban_sdk::Env;

use crate::errors::AccessError;
use crate::storage::{get_paused, set_paused};

pub fn ensure_not_paused(e: &Env) -> Result<(), AccessError> {
    if get_paused(e) {
        return Err(AccessError::ContractPaused);
    }
    Ok(())
}

/// Flips the pause flag. Repeating the current state is rejected.
pub fn set_pause(e: &Env, value: bool) -> Result<(), AccessError> {
    let current = get_paused(e);
    if current == value {
        return Err(if value {
            AccessError::AlreadyPaused
        } else {
            AccessError::NotPaused
        });
    }
    set_paused(e, value);
    Ok(())
}
