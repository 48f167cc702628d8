use soroban_sdk::{contracttype, Address, BytesN, Env};

const DAY_IN_LEDGERS: u32 = 17280;

const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Paused,
    /// Membership flag: DataKey::Role(role_id, account)
    Role(BytesN<32>, Address),
}

pub fn has_owner(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(e: &Env, value: bool) {
    e.storage().instance().set(&DataKey::Paused, &value);
}

pub fn has_role_entry(e: &Env, role: &BytesN<32>, account: &Address) -> bool {
    let key = DataKey::Role(role.clone(), account.clone());
    let present = e.storage().persistent().has(&key);
    if present {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    present
}

pub fn set_role_entry(e: &Env, role: &BytesN<32>, account: &Address) {
    let key = DataKey::Role(role.clone(), account.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_role_entry(e: &Env, role: &BytesN<32>, account: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Role(role.clone(), account.clone()));
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}
