use soroban_sdk::{contracttype, Address, Env};

use crate::types::Credential;

const DAY_IN_LEDGERS: u32 = 17280;

const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    IssuerRegistry,
    CredentialCounter,
    Credential(u64),
    HolderCredentialCount(Address),
    HolderCredential(Address, u32),
    IssuerCredentialCount(Address),
    IssuerCredential(Address, u32),
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::IssuerRegistry)
}

pub fn get_issuer_registry(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::IssuerRegistry)
}

pub fn set_issuer_registry(e: &Env, issuer_registry: &Address) {
    e.storage()
        .instance()
        .set(&DataKey::IssuerRegistry, issuer_registry);
}

pub fn get_credential_counter(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::CredentialCounter)
        .unwrap_or(0)
}

/// Ids are never reused, including after revocation.
pub fn next_credential_id(e: &Env) -> u64 {
    let id = get_credential_counter(e) + 1;
    e.storage()
        .instance()
        .set(&DataKey::CredentialCounter, &id);
    id
}

pub fn get_credential(e: &Env, credential_id: u64) -> Option<Credential> {
    let key = DataKey::Credential(credential_id);
    let credential = e.storage().persistent().get::<_, Credential>(&key);
    if credential.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    credential
}

pub fn set_credential(e: &Env, credential: &Credential) {
    let key = DataKey::Credential(credential.id);
    e.storage().persistent().set(&key, credential);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// Holder / issuer indexes
// ============================================================================
//
// Each index is a per-address count plus one entry per position.

pub fn get_holder_credential_count(e: &Env, holder: &Address) -> u32 {
    read_count(e, &DataKey::HolderCredentialCount(holder.clone()))
}

pub fn get_holder_credential(e: &Env, holder: &Address, position: u32) -> Option<u64> {
    read_position(e, &DataKey::HolderCredential(holder.clone(), position))
}

pub fn add_holder_credential(e: &Env, holder: &Address, credential_id: u64) {
    let position = get_holder_credential_count(e, holder);
    write_position(e, &DataKey::HolderCredential(holder.clone(), position), credential_id);
    write_count(e, &DataKey::HolderCredentialCount(holder.clone()), position + 1);
}

pub fn get_issuer_credential_count(e: &Env, issuer: &Address) -> u32 {
    read_count(e, &DataKey::IssuerCredentialCount(issuer.clone()))
}

pub fn get_issuer_credential(e: &Env, issuer: &Address, position: u32) -> Option<u64> {
    read_position(e, &DataKey::IssuerCredential(issuer.clone(), position))
}

pub fn add_issuer_credential(e: &Env, issuer: &Address, credential_id: u64) {
    let position = get_issuer_credential_count(e, issuer);
    write_position(e, &DataKey::IssuerCredential(issuer.clone(), position), credential_id);
    write_count(e, &DataKey::IssuerCredentialCount(issuer.clone()), position + 1);
}

fn read_count(e: &Env, key: &DataKey) -> u32 {
    match e.storage().persistent().get::<_, u32>(key) {
        Some(count) => {
            e.storage()
                .persistent()
                .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
            count
        }
        None => 0,
    }
}

fn write_count(e: &Env, key: &DataKey, count: u32) {
    e.storage().persistent().set(key, &count);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

fn read_position(e: &Env, key: &DataKey) -> Option<u64> {
    let id = e.storage().persistent().get::<_, u64>(key);
    if id.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    id
}

fn write_position(e: &Env, key: &DataKey, credential_id: u64) {
    e.storage().persistent().set(key, &credential_id);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}
