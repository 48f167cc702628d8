#![no_std]

mod errors;
mod events;
mod pausable;
pub mod roles;
mod storage;


use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String};

pub use crate::errors::AccessError;
use crate::events::*;
use crate::storage::*;

/// Credence Access Control
///
/// Single owner, a pause switch and a role registry. The issuer and
/// credential registries hold this contract's address and ask it whether a
/// caller may act, instead of keeping their own copy of the rules.
///
/// Only the owner grants or revokes roles, pauses, unpauses and hands over
/// ownership. While paused, every mutating entry point except `unpause`
/// fails with `AccessError::ContractPaused`.
#[contract]
pub struct AccessControl;

#[contractimpl]
impl AccessControl {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Record `owner` as the first owner.
    ///
    /// # Errors
    /// * `AccessError::AlreadyInitialized` - If an owner is already recorded
    pub fn initialize(e: &Env, owner: Address) -> Result<(), AccessError> {
        owner.require_auth();

        if has_owner(e) {
            return Err(AccessError::AlreadyInitialized);
        }

        set_owner(e, &owner);
        set_paused(e, false);
        extend_instance_ttl(e);

        InitializedEventData { owner }.publish(e);

        Ok(())
    }

    // ========================================================================
    // ROLES
    // ========================================================================

    /// Grant `role` to `account` (owner only).
    ///
    /// # Errors
    /// * `AccessError::Unauthorized` - If `caller` is not the owner
    /// * `AccessError::ContractPaused` - If the contract is paused
    /// * `AccessError::RoleAlreadyGranted` - If `account` already holds `role`
    pub fn grant_role(
        e: &Env,
        caller: Address,
        account: Address,
        role: BytesN<32>,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        require_owner(e, &caller)?;
        pausable::ensure_not_paused(e)?;

        roles::grant(e, &account, &role)?;

        RoleGrantedEventData {
            role,
            account,
            sender: caller,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Revoke `role` from `account` (owner only).
    ///
    /// # Errors
    /// * `AccessError::Unauthorized` - If `caller` is not the owner
    /// * `AccessError::ContractPaused` - If the contract is paused
    /// * `AccessError::RoleNotGranted` - If `account` does not hold `role`
    pub fn revoke_role(
        e: &Env,
        caller: Address,
        account: Address,
        role: BytesN<32>,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        require_owner(e, &caller)?;
        pausable::ensure_not_paused(e)?;

        roles::revoke(e, &account, &role)?;

        RoleRevokedEventData {
            role,
            account,
            sender: caller,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Drop a role the caller holds.
    pub fn renounce_role(e: &Env, account: Address, role: BytesN<32>) -> Result<(), AccessError> {
        account.require_auth();
        if !has_owner(e) {
            return Err(AccessError::NotInitialized);
        }
        pausable::ensure_not_paused(e)?;

        roles::revoke(e, &account, &role)?;

        RoleRevokedEventData {
            role,
            account: account.clone(),
            sender: account,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    pub fn check_role(e: &Env, account: Address, role: BytesN<32>) -> bool {
        roles::has_role(e, &account, &role)
    }

    /// True when `account` is the owner or holds `role`.
    ///
    /// This is the gate the registries consult before any privileged write.
    pub fn is_authorized(e: &Env, account: Address, role: BytesN<32>) -> bool {
        match get_owner(e) {
            Some(owner) if owner == account => true,
            _ => roles::has_role(e, &account, &role),
        }
    }

    /// keccak-256 of `name`, the id under which the role is stored.
    ///
    /// # Errors
    /// * `AccessError::InvalidRoleName` - If `name` is empty or longer than 64 bytes
    pub fn role_id(e: &Env, name: String) -> Result<BytesN<32>, AccessError> {
        roles::role_id_from_string(e, &name)
    }

    // ========================================================================
    // PAUSE
    // ========================================================================

    /// Pause every mutating entry point (owner only).
    ///
    /// # Errors
    /// * `AccessError::Unauthorized` - If `caller` is not the owner
    /// * `AccessError::AlreadyPaused` - If the contract is already paused
    pub fn pause(e: &Env, caller: Address) -> Result<(), AccessError> {
        caller.require_auth();
        require_owner(e, &caller)?;

        pausable::set_pause(e, true)?;

        PausedEventData { owner: caller }.publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Lift the pause (owner only).
    ///
    /// # Errors
    /// * `AccessError::Unauthorized` - If `caller` is not the owner
    /// * `AccessError::NotPaused` - If the contract is not paused
    pub fn unpause(e: &Env, caller: Address) -> Result<(), AccessError> {
        caller.require_auth();
        require_owner(e, &caller)?;

        pausable::set_pause(e, false)?;

        UnpausedEventData { owner: caller }.publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    pub fn paused(e: &Env) -> bool {
        get_paused(e)
    }

    // ========================================================================
    // OWNERSHIP
    // ========================================================================

    /// Hand ownership to `new_owner` in a single write.
    ///
    /// The previous owner loses every owner-only right as soon as this
    /// returns. There is no pending-owner stage. Naming the current owner
    /// again is rejected instead of succeeding as a no-op, like repeated
    /// pauses and grants.
    ///
    /// # Errors
    /// * `AccessError::Unauthorized` - If `caller` is not the owner
    /// * `AccessError::ContractPaused` - If the contract is paused
    /// * `AccessError::InvalidAddress` - If `new_owner` is this contract or the current owner
    pub fn transfer_ownership(
        e: &Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), AccessError> {
        caller.require_auth();
        let previous_owner = require_owner(e, &caller)?;
        pausable::ensure_not_paused(e)?;

        // The contract's own address stands in for the zero address.
        if new_owner == e.current_contract_address() || new_owner == previous_owner {
            return Err(AccessError::InvalidAddress);
        }

        set_owner(e, &new_owner);
        log!(e, "ownership transferred", previous_owner, new_owner);

        OwnershipTransferredEventData {
            previous_owner,
            new_owner,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    pub fn owner(e: &Env) -> Result<Address, AccessError> {
        get_owner(e).ok_or(AccessError::NotInitialized)
    }
}

/// Returns the owner when it is `caller`.
fn require_owner(e: &Env, caller: &Address) -> Result<Address, AccessError> {
    let owner = get_owner(e).ok_or(AccessError::NotInitialized)?;
    if owner != *caller {
        return Err(AccessError::Unauthorized);
    }
    Ok(owner)
}
