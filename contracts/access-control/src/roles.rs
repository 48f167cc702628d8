//! Role identifiers and role membership.
//!
//! A role id is the keccak-256 hash of the role's name, so any party that
//! hashes the same name (another contract, a test, the web client) derives
//! the same id.

use soroban_sdk::{Address, Bytes, BytesN, Env, String};

use crate::errors::AccessError;
use crate::storage::{has_role_entry, remove_role_entry, set_role_entry};

/// May add or remove issuers in the issuer registry.
pub const ADMIN_ROLE: &str = "ADMIN_ROLE";
/// Counts as a registered issuer without an allow-list entry.
pub const ISSUER_ROLE: &str = "ISSUER_ROLE";

pub const MAX_ROLE_NAME_LEN: usize = 64;

pub fn role_id(e: &Env, name: &str) -> BytesN<32> {
    hash_name(e, name.as_bytes())
}

pub fn role_id_from_string(e: &Env, name: &String) -> Result<BytesN<32>, AccessError> {
    let len = name.len() as usize;
    if len == 0 || len > MAX_ROLE_NAME_LEN {
        return Err(AccessError::InvalidRoleName);
    }
    let mut buf = [0u8; MAX_ROLE_NAME_LEN];
    name.copy_into_slice(&mut buf[..len]);
    Ok(hash_name(e, &buf[..len]))
}

fn hash_name(e: &Env, name: &[u8]) -> BytesN<32> {
    e.crypto().keccak256(&Bytes::from_slice(e, name)).to_bytes()
}

pub fn grant(e: &Env, account: &Address, role: &BytesN<32>) -> Result<(), AccessError> {
    if has_role(e, account, role) {
        return Err(AccessError::RoleAlreadyGranted);
    }
    set_role_entry(e, role, account);
    Ok(())
}

pub fn revoke(e: &Env, account: &Address, role: &BytesN<32>) -> Result<(), AccessError> {
    if !has_role(e, account, role) {
        return Err(AccessError::RoleNotGranted);
    }
    remove_role_entry(e, role, account);
    Ok(())
}

pub fn has_role(e: &Env, account: &Address, role: &BytesN<32>) -> bool {
    has_role_entry(e, role, account)
}
