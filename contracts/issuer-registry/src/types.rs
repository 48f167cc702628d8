use soroban_sdk::{contracttype, Address};

/// Allow-list entry. Its presence is what makes an address an issuer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IssuerRecord {
    pub issuer: Address,
    /// Owner or admin that allow-listed the issuer
    pub added_by: Address,
    pub added_at: u64,
}
