use soroban_sdk::{Address, Env, Symbol};

use crate::access;
use crate::custody;
use crate::errors::LedgerError;
use crate::storage;
use crate::types::{LedgerState, Phase, Proposal, VoterRecord};

/// Outcome of an accepted vote, to be committed by the caller.
pub struct AcceptedVote {
    pub record: VoterRecord,
    pub tally: u32,
}

/// Index of `name` in the proposal set.
pub fn find_proposal(state: &LedgerState, name: &Symbol) -> Result<u32, LedgerError> {
    for (index, proposal) in state.proposals.iter().enumerate() {
        if proposal.name == *name {
            return Ok(index as u32);
        }
    }
    Err(LedgerError::UnknownProposal)
}

/// Votes `record` still allows in the current round. A missing record or one
/// left over from an earlier round means the full quota.
pub fn remaining_votes(state: &LedgerState, record: Option<&VoterRecord>) -> u32 {
    match record {
        Some(record) if record.round == state.round => {
            state.votes_per_voter.saturating_sub(record.cast)
        }
        _ => state.votes_per_voter,
    }
}

/// Validates and applies one vote against `state`.
///
/// Every precondition is checked before the payment is pulled, so a
/// rejected vote moves no funds and leaves `state` untouched. The updated
/// voter record is returned rather than written.
pub fn cast_vote(
    env: &Env,
    state: &mut LedgerState,
    voter: &Address,
    proposal: &Symbol,
    payment: i128,
) -> Result<AcceptedVote, LedgerError> {
    access::require_not_destroyed(state)?;
    voter.require_auth();
    access::require_phase(state, Phase::Active)?;

    let index = find_proposal(state, proposal)?;
    let new_balance = custody::check_payment(state, payment)?;

    let record = storage::get_voter(env, voter);
    let remaining = remaining_votes(state, record.as_ref());
    if remaining == 0 {
        return Err(LedgerError::QuotaExhausted);
    }

    let current = state
        .proposals
        .get(index)
        .ok_or(LedgerError::UnknownProposal)?;
    let tally = current.tally.checked_add(1).ok_or(LedgerError::Overflow)?;
    let total_votes = state.total_votes.checked_add(1).ok_or(LedgerError::Overflow)?;
    let cast = state.votes_per_voter - remaining + 1;

    custody::deposit(env, state, voter, payment, new_balance);
    state.proposals.set(
        index,
        Proposal {
            name: current.name,
            tally,
        },
    );
    state.total_votes = total_votes;

    Ok(AcceptedVote {
        record: VoterRecord {
            round: state.round,
            cast,
        },
        tally,
    })
}
