use soroban_sdk::{contractclient, Address, Env};

/// Calls into the issuer registry this contract is bound to.
#[allow(dead_code)]
#[contractclient(name = "IssuerClient")]
pub trait IssuerRegistryInterface {
    /// Allow-listed, or holder of the issuer role
    fn is_issuer(e: Env, account: Address) -> bool;

    /// Access control contract the issuer registry delegates to
    fn access_control(e: Env) -> Address;
}

/// Owner and pause state, read from the access control contract.
#[allow(dead_code)]
#[contractclient(name = "AccessClient")]
pub trait AccessControlInterface {
    fn owner(e: Env) -> Address;

    fn paused(e: Env) -> bool;
}
