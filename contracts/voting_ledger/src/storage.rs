use soroban_sdk::{Address, Env};

use crate::errors::LedgerError;
use crate::types::{DataKey, LedgerEvent, LedgerState, VoterRecord};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger: 17_280 ledgers ≈ 1 day.
const DAY_IN_LEDGERS: u32 = 17_280;

// The ledger record is bumped on every write and must outlive idle periods
// between voting rounds.
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Voter records and event entries back the client's history replay; they
// are kept alive for the longest extension the network grants.
const PERSISTENT_BUMP_AMOUNT: u32 = 180 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;

// ── Ledger State ─────────────────────────────────────────────────────────────

pub fn has_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

pub fn load_state(env: &Env) -> Result<LedgerState, LedgerError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(LedgerError::NotInitialized)
}

pub fn save_state(env: &Env, state: &LedgerState) {
    env.storage().instance().set(&DataKey::State, state);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Voter Records ────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, voter: &Address) -> Option<VoterRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
}

pub fn save_voter(env: &Env, voter: &Address, record: &VoterRecord) {
    let key = DataKey::Voter(voter.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Event Log ────────────────────────────────────────────────────────────────

pub fn get_event_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::EventCount)
        .unwrap_or(0u64)
}

pub fn set_event_count(env: &Env, count: u64) {
    env.storage().persistent().set(&DataKey::EventCount, &count);
    env.storage().persistent().extend_ttl(
        &DataKey::EventCount,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn save_event(env: &Env, event: &LedgerEvent) {
    let key = DataKey::Event(event.position);
    env.storage().persistent().set(&key, event);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_event(env: &Env, position: u64) -> Option<LedgerEvent> {
    env.storage().persistent().get(&DataKey::Event(position))
}
