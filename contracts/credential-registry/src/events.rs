use soroban_sdk::{contractevent, Address, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub issuer_registry: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialIssuedEventData {
    #[topic]
    pub credential_id: u64,
    #[topic]
    pub holder: Address,
    pub issuer: Address,
    pub credential_type: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialRevokedEventData {
    #[topic]
    pub credential_id: u64,
    pub revoked_by: Address,
}
