use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::window::ClaimWindow;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const CLAIM_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const CLAIM_LIFETIME_THRESHOLD: u32 = CLAIM_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Enum used as storage keys for the contract.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    MerkleRoot,
    StartTime,
    EndTime,
    ReclaimDelay,
    Claimed(Address), // persistent, one entry per account that claimed
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn read_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

pub fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn read_merkle_root(env: &Env) -> BytesN<32> {
    env.storage().instance().get(&DataKey::MerkleRoot).unwrap()
}

pub fn write_merkle_root(env: &Env, root: &BytesN<32>) {
    env.storage().instance().set(&DataKey::MerkleRoot, root);
}

pub fn read_window(env: &Env) -> ClaimWindow {
    let storage = env.storage().instance();
    ClaimWindow {
        start: storage.get(&DataKey::StartTime),
        end: storage.get(&DataKey::EndTime),
        reclaim_delay: storage.get(&DataKey::ReclaimDelay).unwrap_or(0),
    }
}

/// Unset bounds are stored as absent keys.
pub fn write_window(env: &Env, window: &ClaimWindow) {
    let storage = env.storage().instance();
    if let Some(start) = window.start {
        storage.set(&DataKey::StartTime, &start);
    }
    if let Some(end) = window.end {
        storage.set(&DataKey::EndTime, &end);
    }
    storage.set(&DataKey::ReclaimDelay, &window.reclaim_delay);
}

pub fn is_claimed(env: &Env, account: &Address) -> bool {
    let key = DataKey::Claimed(account.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn mark_claimed(env: &Env, account: &Address) {
    let key = DataKey::Claimed(account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, CLAIM_LIFETIME_THRESHOLD, CLAIM_BUMP_AMOUNT);
}
