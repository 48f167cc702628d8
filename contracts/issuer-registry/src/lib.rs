#![no_std]

mod access;
mod errors;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::access::{role_id, AccessClient, ADMIN_ROLE, ISSUER_ROLE};
pub use crate::errors::RegistryError;
use crate::events::*;
use crate::storage::*;
pub use crate::types::IssuerRecord;

/// Credence Issuer Registry
///
/// Allow-list of addresses permitted to issue credentials. Authorization is
/// delegated to the access control contract bound at initialization: the
/// owner, or any holder of `ADMIN_ROLE`, may add or remove issuers, and
/// nothing changes while that contract is paused.
#[contract]
pub struct IssuerRegistry;

#[contractimpl]
impl IssuerRegistry {
    /// Bind the registry to an access control contract.
    ///
    /// # Arguments
    /// * `admin` - Must be the current owner of `access_control`
    /// * `access_control` - Address of the deployed access control contract
    ///
    /// # Errors
    /// * `RegistryError::AlreadyInitialized` - If the registry is already bound
    /// * `RegistryError::Unauthorized` - If `admin` is not the access control owner
    /// * `RegistryError::ContractPaused` - If access control is paused
    pub fn initialize(
        e: &Env,
        admin: Address,
        access_control: Address,
    ) -> Result<(), RegistryError> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(RegistryError::AlreadyInitialized);
        }

        let client = AccessClient::new(e, &access_control);
        if client.owner() != admin {
            return Err(RegistryError::Unauthorized);
        }
        if client.paused() {
            return Err(RegistryError::ContractPaused);
        }

        set_access_control(e, &access_control);
        extend_instance_ttl(e);

        InitializedEventData {
            admin,
            access_control,
        }
        .publish(e);

        Ok(())
    }

    /// Allow-list `issuer` (owner or `ADMIN_ROLE`).
    ///
    /// # Errors
    /// * `RegistryError::Unauthorized` - If `caller` is neither owner nor admin
    /// * `RegistryError::ContractPaused` - If access control is paused
    /// * `RegistryError::IssuerAlreadyRegistered` - If `issuer` is already listed
    pub fn add_issuer(e: &Env, caller: Address, issuer: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        require_admin(e, &caller)?;

        if has_issuer(e, &issuer) {
            return Err(RegistryError::IssuerAlreadyRegistered);
        }

        let record = IssuerRecord {
            issuer: issuer.clone(),
            added_by: caller.clone(),
            added_at: e.ledger().timestamp(),
        };
        set_issuer(e, &record);
        set_issuer_count(e, get_issuer_count(e) + 1);

        IssuerAddedEventData {
            issuer,
            added_by: caller,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// Drop `issuer` from the allow-list (owner or `ADMIN_ROLE`).
    ///
    /// Credentials the issuer already issued are not touched.
    ///
    /// # Errors
    /// * `RegistryError::Unauthorized` - If `caller` is neither owner nor admin
    /// * `RegistryError::ContractPaused` - If access control is paused
    /// * `RegistryError::IssuerNotFound` - If `issuer` is not listed
    pub fn remove_issuer(e: &Env, caller: Address, issuer: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        require_admin(e, &caller)?;

        if !has_issuer(e, &issuer) {
            return Err(RegistryError::IssuerNotFound);
        }

        remove_issuer(e, &issuer);
        set_issuer_count(e, get_issuer_count(e).saturating_sub(1));

        IssuerRemovedEventData {
            issuer,
            removed_by: caller,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    /// True when `account` is allow-listed or holds `ISSUER_ROLE`.
    pub fn is_issuer(e: &Env, account: Address) -> bool {
        if has_issuer(e, &account) {
            return true;
        }
        match get_access_control(e) {
            Some(access_control) => {
                AccessClient::new(e, &access_control).check_role(&account, &role_id(e, ISSUER_ROLE))
            }
            None => false,
        }
    }

    pub fn get_issuer(e: &Env, account: Address) -> Result<IssuerRecord, RegistryError> {
        get_issuer(e, &account).ok_or(RegistryError::IssuerNotFound)
    }

    pub fn issuer_count(e: &Env) -> u32 {
        get_issuer_count(e)
    }

    pub fn access_control(e: &Env) -> Result<Address, RegistryError> {
        get_access_control(e).ok_or(RegistryError::NotInitialized)
    }
}

fn require_admin(e: &Env, caller: &Address) -> Result<(), RegistryError> {
    let access_control = get_access_control(e).ok_or(RegistryError::NotInitialized)?;
    let client = AccessClient::new(e, &access_control);

    if !client.is_authorized(caller, &role_id(e, ADMIN_ROLE)) {
        return Err(RegistryError::Unauthorized);
    }
    if client.paused() {
        return Err(RegistryError::ContractPaused);
    }
    Ok(())
}
