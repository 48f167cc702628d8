#![no_std]

mod errors;
mod events;
mod registry;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Vec};

pub use crate::errors::CredentialError;
use crate::events::*;
use crate::registry::{AccessClient, IssuerClient};
use crate::storage::*;
pub use crate::types::{Credential, CredentialStatus};
use crate::types::{MAX_CREDENTIAL_TYPE_LEN, MAX_PAGE_LIMIT};

/// Credence Credential Registry
///
/// Append-only log of credential issuances. A credential can only be issued
/// by an address the issuer registry recognises at that moment, and can only
/// move from `Active` to `Revoked`. Records are never deleted, so the full
/// history of every id stays readable.
///
/// Owner and pause state come from the access control contract that the
/// issuer registry is bound to.
#[contract]
pub struct CredentialRegistry;

#[contractimpl]
impl CredentialRegistry {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Bind the registry to an issuer registry.
    ///
    /// # Arguments
    /// * `admin` - Must be the owner of the access control contract behind `issuer_registry`
    /// * `issuer_registry` - Address of the deployed issuer registry
    ///
    /// # Errors
    /// * `CredentialError::AlreadyInitialized` - If the registry is already bound
    /// * `CredentialError::Unauthorized` - If `admin` is not the access control owner
    /// * `CredentialError::ContractPaused` - If access control is paused
    pub fn initialize(
        e: &Env,
        admin: Address,
        issuer_registry: Address,
    ) -> Result<(), CredentialError> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(CredentialError::AlreadyInitialized);
        }

        let access_control = IssuerClient::new(e, &issuer_registry).access_control();
        let access = AccessClient::new(e, &access_control);
        if access.owner() != admin {
            return Err(CredentialError::Unauthorized);
        }
        if access.paused() {
            return Err(CredentialError::ContractPaused);
        }

        set_issuer_registry(e, &issuer_registry);
        extend_instance_ttl(e);

        InitializedEventData {
            admin,
            issuer_registry,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // ISSUANCE
    // ========================================================================

    /// Issue a credential to `holder`.
    ///
    /// # Arguments
    /// * `issuer` - Issuing address, must be recognised by the issuer registry
    /// * `holder` - Subject of the credential
    /// * `credential_type` - Type tag, 1 to 64 bytes (e.g. "degree")
    /// * `metadata_hash` - Hash of the off-chain credential document
    ///
    /// # Returns
    /// * The new credential id
    ///
    /// # Errors
    /// * `CredentialError::NotIssuer` - If `issuer` is not a registered issuer
    /// * `CredentialError::ContractPaused` - If access control is paused
    /// * `CredentialError::InvalidCredentialType` - If the type tag is empty or too long
    pub fn issue_credential(
        e: &Env,
        issuer: Address,
        holder: Address,
        credential_type: String,
        metadata_hash: BytesN<32>,
    ) -> Result<u64, CredentialError> {
        issuer.require_auth();

        let registry = issuer_registry_client(e)?;
        if !registry.is_issuer(&issuer) {
            return Err(CredentialError::NotIssuer);
        }
        ensure_not_paused(e, &registry)?;

        if credential_type.is_empty() || credential_type.len() > MAX_CREDENTIAL_TYPE_LEN {
            return Err(CredentialError::InvalidCredentialType);
        }

        let id = next_credential_id(e);
        let credential = Credential {
            id,
            issuer: issuer.clone(),
            holder: holder.clone(),
            credential_type: credential_type.clone(),
            metadata_hash,
            status: CredentialStatus::Active,
            issued_at: e.ledger().timestamp(),
            revoked_at: None,
        };

        set_credential(e, &credential);
        add_holder_credential(e, &holder, id);
        add_issuer_credential(e, &issuer, id);

        CredentialIssuedEventData {
            credential_id: id,
            holder,
            issuer,
            credential_type,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(id)
    }

    /// Revoke a credential (original issuer or owner).
    ///
    /// The record stays in storage with status `Revoked` and the revocation
    /// time. An issuer dropped from the allow-list can still revoke what it
    /// issued.
    ///
    /// # Errors
    /// * `CredentialError::CredentialNotFound` - If the id was never issued
    /// * `CredentialError::Unauthorized` - If `caller` is neither the issuer nor the owner
    /// * `CredentialError::ContractPaused` - If access control is paused
    /// * `CredentialError::AlreadyRevoked` - If the credential is already revoked
    pub fn revoke_credential(
        e: &Env,
        caller: Address,
        credential_id: u64,
    ) -> Result<(), CredentialError> {
        caller.require_auth();

        let registry = issuer_registry_client(e)?;
        let mut credential =
            get_credential(e, credential_id).ok_or(CredentialError::CredentialNotFound)?;

        if caller != credential.issuer {
            let access = AccessClient::new(e, &registry.access_control());
            if caller != access.owner() {
                return Err(CredentialError::Unauthorized);
            }
        }
        ensure_not_paused(e, &registry)?;

        if credential.status == CredentialStatus::Revoked {
            return Err(CredentialError::AlreadyRevoked);
        }

        let now = e.ledger().timestamp();
        credential.status = CredentialStatus::Revoked;
        credential.revoked_at = Some(now);
        set_credential(e, &credential);

        log!(e, "credential revoked", credential_id, caller);

        CredentialRevokedEventData {
            credential_id,
            revoked_by: caller,
        }
        .publish(e);

        extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_credential(e: &Env, credential_id: u64) -> Result<Credential, CredentialError> {
        get_credential(e, credential_id).ok_or(CredentialError::CredentialNotFound)
    }

    /// False for revoked and for unknown ids.
    pub fn is_active(e: &Env, credential_id: u64) -> bool {
        get_credential(e, credential_id)
            .map(|c| c.is_active())
            .unwrap_or(false)
    }

    /// Ids issued to `holder`, oldest first, paginated.
    ///
    /// # Arguments
    /// * `start` - Position of the first id to return (0 is the oldest)
    /// * `limit` - Maximum number of ids to return (1 to 100)
    ///
    /// # Errors
    /// * `CredentialError::InvalidPageLimit` - If `limit` is 0 or above 100
    pub fn holder_credentials(
        e: &Env,
        holder: Address,
        start: u32,
        limit: u32,
    ) -> Result<Vec<u64>, CredentialError> {
        let count = get_holder_credential_count(e, &holder);
        page(e, start, limit, count, |position| {
            get_holder_credential(e, &holder, position)
        })
    }

    pub fn holder_credential_count(e: &Env, holder: Address) -> u32 {
        get_holder_credential_count(e, &holder)
    }

    /// Ids issued by `issuer`, oldest first, paginated like `holder_credentials`.
    ///
    /// # Errors
    /// * `CredentialError::InvalidPageLimit` - If `limit` is 0 or above 100
    pub fn issuer_credentials(
        e: &Env,
        issuer: Address,
        start: u32,
        limit: u32,
    ) -> Result<Vec<u64>, CredentialError> {
        let count = get_issuer_credential_count(e, &issuer);
        page(e, start, limit, count, |position| {
            get_issuer_credential(e, &issuer, position)
        })
    }

    pub fn issuer_credential_count(e: &Env, issuer: Address) -> u32 {
        get_issuer_credential_count(e, &issuer)
    }

    pub fn credential_count(e: &Env) -> u64 {
        get_credential_counter(e)
    }

    pub fn issuer_registry(e: &Env) -> Result<Address, CredentialError> {
        get_issuer_registry(e).ok_or(CredentialError::NotInitialized)
    }
}

fn issuer_registry_client(e: &Env) -> Result<IssuerClient<'_>, CredentialError> {
    let address = get_issuer_registry(e).ok_or(CredentialError::NotInitialized)?;
    Ok(IssuerClient::new(e, &address))
}

fn ensure_not_paused(e: &Env, registry: &IssuerClient) -> Result<(), CredentialError> {
    if AccessClient::new(e, &registry.access_control()).paused() {
        return Err(CredentialError::ContractPaused);
    }
    Ok(())
}

/// Collect positions `start..start + limit` of an index holding `count` ids.
fn page(
    e: &Env,
    start: u32,
    limit: u32,
    count: u32,
    read: impl Fn(u32) -> Option<u64>,
) -> Result<Vec<u64>, CredentialError> {
    if limit == 0 || limit > MAX_PAGE_LIMIT {
        return Err(CredentialError::InvalidPageLimit);
    }

    let mut ids: Vec<u64> = Vec::new(e);
    let end = start.saturating_add(limit).min(count);
    for position in start..end {
        if let Some(id) = read(position) {
            ids.push_back(id);
        }
    }
    Ok(ids)
}
