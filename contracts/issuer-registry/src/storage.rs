//! Storage keys and helper functions for the issuer registry.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::IssuerRecord;

const DAY_IN_LEDGERS: u32 = 17280;

const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address of the bound access control contract
    AccessControl,
    /// Allow-list entry: DataKey::Issuer(issuer_address)
    Issuer(Address),
    /// Number of allow-list entries
    IssuerCount,
}

// ─────────────────────────────────────────────────────────────────────────────
// Instance
// ─────────────────────────────────────────────────────────────────────────────

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::AccessControl)
}

pub fn get_access_control(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::AccessControl)
}

pub fn set_access_control(e: &Env, access_control: &Address) {
    e.storage()
        .instance()
        .set(&DataKey::AccessControl, access_control);
}

pub fn get_issuer_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::IssuerCount)
        .unwrap_or(0)
}

pub fn set_issuer_count(e: &Env, count: u32) {
    e.storage().instance().set(&DataKey::IssuerCount, &count);
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ─────────────────────────────────────────────────────────────────────────────
// Allow-list
// ─────────────────────────────────────────────────────────────────────────────

pub fn has_issuer(e: &Env, issuer: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Issuer(issuer.clone()))
}

pub fn get_issuer(e: &Env, issuer: &Address) -> Option<IssuerRecord> {
    let key = DataKey::Issuer(issuer.clone());
    let record = e.storage().persistent().get::<_, IssuerRecord>(&key);
    if record.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    record
}

pub fn set_issuer(e: &Env, record: &IssuerRecord) {
    let key = DataKey::Issuer(record.issuer.clone());
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_issuer(e: &Env, issuer: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Issuer(issuer.clone()));
}
