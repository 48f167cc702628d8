use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env};

pub const ADMIN_ROLE: &str = "ADMIN_ROLE";
pub const ISSUER_ROLE: &str = "ISSUER_ROLE";

/// The slice of the access control contract this registry calls into.
#[allow(dead_code)]
#[contractclient(name = "AccessClient")]
pub trait AccessControlInterface {
    fn owner(e: Env) -> Address;

    fn paused(e: Env) -> bool;

    fn check_role(e: Env, account: Address, role: BytesN<32>) -> bool;

    /// Owner, or holder of `role`
    fn is_authorized(e: Env, account: Address, role: BytesN<32>) -> bool;
}

/// Same derivation as the access control contract: keccak-256 of the name.
pub fn role_id(e: &Env, name: &str) -> BytesN<32> {
    e.crypto()
        .keccak256(&Bytes::from_slice(e, name.as_bytes()))
        .to_bytes()
}
