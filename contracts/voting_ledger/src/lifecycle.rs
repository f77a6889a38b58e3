//! Owner-gated phase transitions.
//!
//! ```text
//! Active --end_voting--> Ended --reset_voting--> Active
//!    \                     |
//!     +------destroy-------+----> Destroyed (terminal)
//! ```

use soroban_sdk::{Address, Env, Symbol, Vec};

use crate::access;
use crate::errors::LedgerError;
use crate::types::{LedgerState, Phase, Proposal};

pub fn end_voting(state: &mut LedgerState, caller: &Address) -> Result<(), LedgerError> {
    access::require_admin(state, caller)?;
    access::require_phase(state, Phase::Active)?;

    state.phase = Phase::Ended;
    Ok(())
}

/// Picks the proposal with the highest tally. Ties go to the proposal
/// declared first.
pub fn declare_winner(state: &mut LedgerState, caller: &Address) -> Result<Symbol, LedgerError> {
    access::require_admin(state, caller)?;
    access::require_phase(state, Phase::Ended)?;

    let mut leader: Option<Proposal> = None;
    for proposal in state.proposals.iter() {
        let ahead = match &leader {
            Some(best) => proposal.tally > best.tally,
            None => true,
        };
        if ahead {
            leader = Some(proposal);
        }
    }

    let winner = leader.ok_or(LedgerError::InvalidState)?.name;
    state.winner = Some(winner.clone());
    Ok(winner)
}

/// Zeroes every tally and starts a new round. The balance is kept.
pub fn reset_voting(env: &Env, state: &mut LedgerState, caller: &Address) -> Result<(), LedgerError> {
    access::require_admin(state, caller)?;
    access::require_phase(state, Phase::Ended)?;

    let round = state.round.checked_add(1).ok_or(LedgerError::Overflow)?;

    let mut proposals = Vec::new(env);
    for proposal in state.proposals.iter() {
        proposals.push_back(Proposal {
            name: proposal.name,
            tally: 0,
        });
    }

    state.proposals = proposals;
    state.total_votes = 0;
    state.winner = None;
    state.round = round;
    state.phase = Phase::Active;
    Ok(())
}

/// Any balance still held is left in the ledger.
pub fn destroy(state: &mut LedgerState, caller: &Address) -> Result<(), LedgerError> {
    access::require_admin(state, caller)?;

    state.phase = Phase::Destroyed;
    state.winner = None;
    Ok(())
}

/// Returns the previous owner.
pub fn change_owner(
    env: &Env,
    state: &mut LedgerState,
    caller: &Address,
    new_owner: &Address,
) -> Result<Address, LedgerError> {
    access::require_admin(state, caller)?;
    access::validate_address(env, new_owner)?;

    let previous = state.owner.clone();
    state.owner = new_owner.clone();
    Ok(previous)
}
