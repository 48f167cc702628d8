#![cfg(test)]

use credence_access_control::{roles, AccessControl, AccessControlClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

use crate::{IssuerRegistry, IssuerRegistryClient, RegistryError};

fn setup(e: &Env) -> (Address, AccessControlClient<'_>, IssuerRegistryClient<'_>) {
    e.mock_all_auths();
    e.ledger().set_timestamp(1_000);

    let owner = Address::generate(e);

    let access_id = e.register(AccessControl, ());
    let access = AccessControlClient::new(e, &access_id);
    access.initialize(&owner);

    let registry_id = e.register(IssuerRegistry, ());
    let registry = IssuerRegistryClient::new(e, &registry_id);
    registry.initialize(&owner, &access_id);

    (owner, access, registry)
}

#[test]
fn test_initialize() {
    let e = Env::default();
    let (_owner, access, registry) = setup(&e);

    assert_eq!(registry.access_control(), access.address);
    assert_eq!(registry.issuer_count(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let e = Env::default();
    let (owner, access, registry) = setup(&e);

    assert_eq!(
        registry.try_initialize(&owner, &access.address),
        Err(Ok(RegistryError::AlreadyInitialized))
    );
}

#[test]
fn test_initialize_by_non_owner_fails() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);
    let stranger = Address::generate(&e);

    let access_id = e.register(AccessControl, ());
    AccessControlClient::new(&e, &access_id).initialize(&owner);

    let registry_id = e.register(IssuerRegistry, ());
    let registry = IssuerRegistryClient::new(&e, &registry_id);

    assert_eq!(
        registry.try_initialize(&stranger, &access_id),
        Err(Ok(RegistryError::Unauthorized))
    );
    assert_eq!(
        registry.try_access_control(),
        Err(Ok(RegistryError::NotInitialized))
    );
}

#[test]
fn test_initialize_while_paused_fails() {
    let e = Env::default();
    e.mock_all_auths();
    let owner = Address::generate(&e);

    let access_id = e.register(AccessControl, ());
    let access = AccessControlClient::new(&e, &access_id);
    access.initialize(&owner);
    access.pause(&owner);

    let registry_id = e.register(IssuerRegistry, ());
    let registry = IssuerRegistryClient::new(&e, &registry_id);

    assert_eq!(
        registry.try_initialize(&owner, &access_id),
        Err(Ok(RegistryError::ContractPaused))
    );

    access.unpause(&owner);
    registry.initialize(&owner, &access_id);
    assert_eq!(registry.access_control(), access_id);
}

#[test]
fn test_owner_adds_and_removes_issuer() {
    let e = Env::default();
    let (owner, _access, registry) = setup(&e);
    let issuer = Address::generate(&e);

    assert!(!registry.is_issuer(&issuer));

    registry.add_issuer(&owner, &issuer);
    assert!(registry.is_issuer(&issuer));
    assert_eq!(registry.issuer_count(), 1);

    let record = registry.get_issuer(&issuer);
    assert_eq!(record.issuer, issuer);
    assert_eq!(record.added_by, owner);
    assert_eq!(record.added_at, 1_000);

    registry.remove_issuer(&owner, &issuer);
    assert!(!registry.is_issuer(&issuer));
    assert_eq!(registry.issuer_count(), 0);
    assert_eq!(
        registry.try_get_issuer(&issuer),
        Err(Ok(RegistryError::IssuerNotFound))
    );
}

#[test]
fn test_admin_role_can_manage_issuers() {
    let e = Env::default();
    let (owner, access, registry) = setup(&e);
    let admin = Address::generate(&e);
    let issuer = Address::generate(&e);

    access.grant_role(&owner, &admin, &roles::role_id(&e, roles::ADMIN_ROLE));

    registry.add_issuer(&admin, &issuer);
    assert!(registry.is_issuer(&issuer));
    assert_eq!(registry.get_issuer(&issuer).added_by, admin);

    registry.remove_issuer(&admin, &issuer);
    assert!(!registry.is_issuer(&issuer));
}

#[test]
fn test_stranger_cannot_manage_issuers() {
    let e = Env::default();
    let (owner, _access, registry) = setup(&e);
    let stranger = Address::generate(&e);
    let issuer = Address::generate(&e);

    assert_eq!(
        registry.try_add_issuer(&stranger, &issuer),
        Err(Ok(RegistryError::Unauthorized))
    );
    assert!(!registry.is_issuer(&issuer));

    registry.add_issuer(&owner, &issuer);
    assert_eq!(
        registry.try_remove_issuer(&stranger, &issuer),
        Err(Ok(RegistryError::Unauthorized))
    );
    assert!(registry.is_issuer(&issuer));
}

#[test]
fn test_revoked_admin_loses_access() {
    let e = Env::default();
    let (owner, access, registry) = setup(&e);
    let admin = Address::generate(&e);
    let admin_role = roles::role_id(&e, roles::ADMIN_ROLE);

    access.grant_role(&owner, &admin, &admin_role);
    access.revoke_role(&owner, &admin, &admin_role);

    assert_eq!(
        registry.try_add_issuer(&admin, &Address::generate(&e)),
        Err(Ok(RegistryError::Unauthorized))
    );
}

#[test]
fn test_duplicate_and_missing_issuer() {
    let e = Env::default();
    let (owner, _access, registry) = setup(&e);
    let issuer = Address::generate(&e);

    registry.add_issuer(&owner, &issuer);
    assert_eq!(
        registry.try_add_issuer(&owner, &issuer),
        Err(Ok(RegistryError::IssuerAlreadyRegistered))
    );
    assert_eq!(registry.issuer_count(), 1);

    let unknown = Address::generate(&e);
    assert_eq!(
        registry.try_remove_issuer(&owner, &unknown),
        Err(Ok(RegistryError::IssuerNotFound))
    );
}

#[test]
fn test_pause_blocks_issuer_changes() {
    let e = Env::default();
    let (owner, access, registry) = setup(&e);
    let listed = Address::generate(&e);
    let issuer = Address::generate(&e);
    registry.add_issuer(&owner, &listed);

    access.pause(&owner);

    assert_eq!(
        registry.try_add_issuer(&owner, &issuer),
        Err(Ok(RegistryError::ContractPaused))
    );
    assert_eq!(
        registry.try_remove_issuer(&owner, &listed),
        Err(Ok(RegistryError::ContractPaused))
    );
    assert!(registry.is_issuer(&listed));

    access.unpause(&owner);
    registry.add_issuer(&owner, &issuer);
    assert!(registry.is_issuer(&issuer));
}

#[test]
fn test_new_owner_takes_over_issuer_management() {
    let e = Env::default();
    let (owner, access, registry) = setup(&e);
    let new_owner = Address::generate(&e);
    let issuer = Address::generate(&e);

    access.transfer_ownership(&owner, &new_owner);

    assert_eq!(
        registry.try_add_issuer(&owner, &issuer),
        Err(Ok(RegistryError::Unauthorized))
    );
    registry.add_issuer(&new_owner, &issuer);
    assert!(registry.is_issuer(&issuer));
}

#[test]
fn test_issuer_role_counts_as_issuer() {
    let e = Env::default();
    let (owner, access, registry) = setup(&e);
    let holder = Address::generate(&e);
    let issuer_role = roles::role_id(&e, roles::ISSUER_ROLE);

    access.grant_role(&owner, &holder, &issuer_role);
    assert!(registry.is_issuer(&holder));
    assert_eq!(registry.issuer_count(), 0);

    access.revoke_role(&owner, &holder, &issuer_role);
    assert!(!registry.is_issuer(&holder));
}

#[test]
fn test_role_ids_agree_with_access_control() {
    let e = Env::default();
    let (_owner, access, _registry) = setup(&e);

    assert_eq!(
        crate::access::role_id(&e, crate::access::ADMIN_ROLE),
        access.role_id(&String::from_str(&e, "ADMIN_ROLE"))
    );
    assert_eq!(
        crate::access::role_id(&e, crate::access::ISSUER_ROLE),
        roles::role_id(&e, roles::ISSUER_ROLE)
    );
}
