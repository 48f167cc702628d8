//! Credential records kept by the registry.

use soroban_sdk::{contracttype, Address, BytesN, String};

pub const MAX_CREDENTIAL_TYPE_LEN: u32 = 64;

/// Largest page the index queries return in one call.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Lifecycle of a credential. `Revoked` is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CredentialStatus {
    Active = 0,
    Revoked = 1,
}

/// One issuance. Written once, only `status` and `revoked_at` ever change,
/// and the record is never removed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Credential {
    /// Sequential id, starting at 1
    pub id: u64,
    pub issuer: Address,
    pub holder: Address,
    /// Free-form type tag, e.g. "degree"
    pub credential_type: String,
    /// Hash of the off-chain credential document
    pub metadata_hash: BytesN<32>,
    pub status: CredentialStatus,
    pub issued_at: u64,
    pub revoked_at: Option<u64>,
}

impl Credential {
    pub fn is_active(&self) -> bool {
        self.status == CredentialStatus::Active
    }
}
