#![no_std]
//! # Voting Ledger
//!
//! A paid, quota-gated voting register over a small fixed set of named
//! proposals. The ledger custodies the vote payments and exposes owner-gated
//! lifecycle control (end, declare winner, reset, change owner, destroy,
//! withdraw). Every committed mutation is appended to an ordered event log
//! that clients replay by position range.

mod access;
mod custody;
mod errors;
mod events;
mod lifecycle;
mod storage;
mod types;
mod voting;

pub use errors::LedgerError;
pub use events::MAX_EVENT_RANGE;
pub use types::{
    EventKind, LedgerEvent, LedgerState, Phase, Proposal, VoteHistoryEntry, VoterRecord,
};

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

/// Upper bound on the proposal set fixed at genesis.
pub const MAX_PROPOSALS: u32 = 16;

#[contract]
pub struct VotingLedgerContract;

/// Writes the mutated state and appends its event as one step. Only reached
/// once the handler has returned `Ok`.
fn commit(env: &Env, state: &LedgerState, kind: EventKind) -> u64 {
    storage::save_state(env, state);
    events::append(env, kind)
}

fn validate_proposals(proposals: &Vec<Symbol>) -> Result<(), LedgerError> {
    if proposals.is_empty() || proposals.len() > MAX_PROPOSALS {
        return Err(LedgerError::InvalidInput);
    }
    for (i, name) in proposals.iter().enumerate() {
        for other in proposals.iter().skip(i + 1) {
            if name == other {
                return Err(LedgerError::InvalidInput);
            }
        }
    }
    Ok(())
}

#[contractimpl]
impl VotingLedgerContract {
    // ── Genesis ──────────────────────────────────────────────────────────────

    /// Create the ledger. Can only be called once.
    ///
    /// # Arguments
    /// * `owner`           – Administrator, must authorize the call
    /// * `second_owner`    – Backup administrator (read-only)
    /// * `payment_token`   – Asset that votes are paid in
    /// * `vote_cost`       – Exact payment required per vote, in token base units
    /// * `votes_per_voter` – Quota each voter gets per round
    /// * `proposals`       – Proposal names, in tie-break order
    pub fn initialize(
        env: Env,
        owner: Address,
        second_owner: Address,
        payment_token: Address,
        vote_cost: i128,
        votes_per_voter: u32,
        proposals: Vec<Symbol>,
    ) -> Result<(), LedgerError> {
        if storage::has_state(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }

        access::validate_address(&env, &owner)?;
        access::validate_address(&env, &second_owner)?;
        validate_proposals(&proposals)?;
        if vote_cost < 0 || votes_per_voter == 0 {
            return Err(LedgerError::InvalidInput);
        }

        owner.require_auth();

        let mut tallies = Vec::new(&env);
        for name in proposals.iter() {
            tallies.push_back(Proposal { name, tally: 0 });
        }

        let state = LedgerState {
            owner: owner.clone(),
            second_owner,
            phase: Phase::Active,
            payment_token,
            vote_cost,
            votes_per_voter,
            total_votes: 0,
            balance: 0,
            winner: None,
            round: 0,
            proposals: tallies,
        };

        commit(&env, &state, EventKind::Initialized(owner));
        Ok(())
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast one vote for `proposal`, paying exactly the vote cost.
    /// Returns the proposal's new tally.
    pub fn vote(
        env: Env,
        voter: Address,
        proposal: Symbol,
        payment: i128,
    ) -> Result<u32, LedgerError> {
        let mut state = storage::load_state(&env)?;
        let accepted = voting::cast_vote(&env, &mut state, &voter, &proposal, payment)?;

        storage::save_voter(&env, &voter, &accepted.record);
        commit(
            &env,
            &state,
            EventKind::Voted(voter, proposal, accepted.tally),
        );
        Ok(accepted.tally)
    }

    // ── Lifecycle ────────────────────────────────────────────────────────────

    pub fn end_voting(env: Env, caller: Address) -> Result<(), LedgerError> {
        let mut state = storage::load_state(&env)?;
        lifecycle::end_voting(&mut state, &caller)?;
        commit(&env, &state, EventKind::VotingEnded);
        Ok(())
    }

    /// Declare the leading proposal the winner. Voting must have ended.
    pub fn declare_winner(env: Env, caller: Address) -> Result<Symbol, LedgerError> {
        let mut state = storage::load_state(&env)?;
        let winner = lifecycle::declare_winner(&mut state, &caller)?;
        commit(&env, &state, EventKind::WinnerDeclared(winner.clone()));
        Ok(winner)
    }

    /// Start a new round: tallies, quotas and the winner are cleared.
    pub fn reset_voting(env: Env, caller: Address) -> Result<(), LedgerError> {
        let mut state = storage::load_state(&env)?;
        lifecycle::reset_voting(&env, &mut state, &caller)?;
        commit(&env, &state, EventKind::VotingReset);
        Ok(())
    }

    pub fn change_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), LedgerError> {
        let mut state = storage::load_state(&env)?;
        let previous = lifecycle::change_owner(&env, &mut state, &caller, &new_owner)?;
        commit(
            &env,
            &state,
            EventKind::OwnershipTransferred(previous, new_owner),
        );
        Ok(())
    }

    /// Permanently freeze the ledger. Funds not withdrawn beforehand stay locked.
    pub fn destroy(env: Env, caller: Address) -> Result<(), LedgerError> {
        let mut state = storage::load_state(&env)?;
        lifecycle::destroy(&mut state, &caller)?;
        commit(&env, &state, EventKind::ContractDestroyed);
        Ok(())
    }

    // ── Funds ────────────────────────────────────────────────────────────────

    /// Send the whole balance to the owner. Returns the amount withdrawn.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, LedgerError> {
        let mut state = storage::load_state(&env)?;
        let amount = custody::withdraw(&env, &mut state, &caller)?;
        commit(
            &env,
            &state,
            EventKind::FundsWithdrawn(state.owner.clone(), amount),
        );
        Ok(amount)
    }

    // ── Views ────────────────────────────────────────────────────────────────

    pub fn proposal_tally(env: Env, name: Symbol) -> Result<u32, LedgerError> {
        let state = storage::load_state(&env)?;
        let index = voting::find_proposal(&state, &name)?;
        state
            .proposals
            .get(index)
            .map(|proposal| proposal.tally)
            .ok_or(LedgerError::UnknownProposal)
    }

    pub fn proposal_names(env: Env) -> Result<Vec<Symbol>, LedgerError> {
        let state = storage::load_state(&env)?;
        let mut names = Vec::new(&env);
        for proposal in state.proposals.iter() {
            names.push_back(proposal.name);
        }
        Ok(names)
    }

    pub fn owner(env: Env) -> Result<Address, LedgerError> {
        Ok(storage::load_state(&env)?.owner)
    }

    pub fn second_owner(env: Env) -> Result<Address, LedgerError> {
        Ok(storage::load_state(&env)?.second_owner)
    }

    pub fn is_voting_active(env: Env) -> Result<bool, LedgerError> {
        Ok(storage::load_state(&env)?.phase == Phase::Active)
    }

    pub fn is_destroyed(env: Env) -> Result<bool, LedgerError> {
        Ok(storage::load_state(&env)?.phase == Phase::Destroyed)
    }

    pub fn total_votes(env: Env) -> Result<u32, LedgerError> {
        Ok(storage::load_state(&env)?.total_votes)
    }

    pub fn vote_cost(env: Env) -> Result<i128, LedgerError> {
        Ok(storage::load_state(&env)?.vote_cost)
    }

    pub fn payment_token(env: Env) -> Result<Address, LedgerError> {
        Ok(storage::load_state(&env)?.payment_token)
    }

    pub fn balance(env: Env) -> Result<i128, LedgerError> {
        Ok(storage::load_state(&env)?.balance)
    }

    pub fn get_remaining_votes(env: Env, voter: Address) -> Result<u32, LedgerError> {
        let state = storage::load_state(&env)?;
        let record = storage::get_voter(&env, &voter);
        Ok(voting::remaining_votes(&state, record.as_ref()))
    }

    pub fn winner_proposal(env: Env) -> Result<Option<Symbol>, LedgerError> {
        Ok(storage::load_state(&env)?.winner)
    }

    // ── Event Log ────────────────────────────────────────────────────────────

    /// Position of the most recent event; 0 before genesis.
    pub fn event_count(env: Env) -> u64 {
        storage::get_event_count(&env)
    }

    /// Events at positions `from..=to`, at most `MAX_EVENT_RANGE` wide.
    pub fn query_events(env: Env, from: u64, to: u64) -> Result<Vec<LedgerEvent>, LedgerError> {
        events::range(&env, from, to)
    }

    /// Vote history replayed from the `Voted` events in `from..=to`.
    pub fn vote_history(
        env: Env,
        from: u64,
        to: u64,
    ) -> Result<Vec<VoteHistoryEntry>, LedgerError> {
        events::vote_history(&env, from, to)
    }
}
