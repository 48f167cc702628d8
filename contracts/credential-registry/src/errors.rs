use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CredentialError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    ContractPaused = 4,
    NotIssuer = 5,
    CredentialNotFound = 6,
    AlreadyRevoked = 7,
    InvalidCredentialType = 8,
    InvalidPageLimit = 9,
}
