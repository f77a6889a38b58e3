use soroban_sdk::{contractevent, symbol_short, Env, Symbol, Vec};

use crate::errors::LedgerError;
use crate::storage;
use crate::types::{EventKind, LedgerEvent, VoteHistoryEntry};

/// Widest range a single query may span. Every event is its own ledger
/// entry, and a call may touch at most 100 entries including the contract
/// instance and the event count.
pub const MAX_EVENT_RANGE: u64 = 64;

/// Published for every appended entry, for off-chain indexers.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventAppended {
    #[topic]
    pub name: Symbol,
    #[topic]
    pub position: u64,
    pub kind: EventKind,
}

impl EventKind {
    /// Topic under which the event is published for off-chain indexers.
    pub fn topic(&self) -> Symbol {
        match self {
            EventKind::Initialized(_) => symbol_short!("init"),
            EventKind::Voted(..) => symbol_short!("voted"),
            EventKind::VotingEnded => symbol_short!("ended"),
            EventKind::WinnerDeclared(_) => symbol_short!("winner"),
            EventKind::VotingReset => symbol_short!("reset"),
            EventKind::OwnershipTransferred(..) => symbol_short!("owner_xfr"),
            EventKind::ContractDestroyed => symbol_short!("destroyed"),
            EventKind::FundsWithdrawn(..) => symbol_short!("withdrawn"),
        }
    }
}

/// Appends `kind` at the next position and publishes it. Returns the position.
pub fn append(env: &Env, kind: EventKind) -> u64 {
    let position = storage::get_event_count(env) + 1;
    let event = LedgerEvent {
        position,
        ledger: env.ledger().sequence(),
        timestamp: env.ledger().timestamp(),
        kind,
    };

    storage::save_event(env, &event);
    storage::set_event_count(env, position);

    EventAppended {
        name: event.kind.topic(),
        position,
        kind: event.kind,
    }
    .publish(env);

    position
}

fn check_range(from: u64, to: u64) -> Result<(), LedgerError> {
    if from == 0 || to < from || to - from >= MAX_EVENT_RANGE {
        return Err(LedgerError::InvalidRange);
    }
    Ok(())
}

/// Events at positions `from..=to`, in order. Positions past the end of the
/// log are skipped.
pub fn range(env: &Env, from: u64, to: u64) -> Result<Vec<LedgerEvent>, LedgerError> {
    check_range(from, to)?;

    let last = to.min(storage::get_event_count(env));
    let mut results = Vec::new(env);
    for position in from..=last {
        if let Some(event) = storage::get_event(env, position) {
            results.push_back(event);
        }
    }
    Ok(results)
}

/// Replays the `Voted` events in `from..=to` as (proposal, tally) pairs.
pub fn vote_history(env: &Env, from: u64, to: u64) -> Result<Vec<VoteHistoryEntry>, LedgerError> {
    let mut history = Vec::new(env);
    for event in range(env, from, to)?.iter() {
        if let EventKind::Voted(_, proposal, votes) = event.kind {
            history.push_back(VoteHistoryEntry { proposal, votes });
        }
    }
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(1, 1), Ok(()));
        assert_eq!(check_range(1, MAX_EVENT_RANGE), Ok(()));
        assert_eq!(check_range(65, 128), Ok(()));
        assert_eq!(check_range(0, 5), Err(LedgerError::InvalidRange));
        assert_eq!(check_range(5, 4), Err(LedgerError::InvalidRange));
        assert_eq!(
            check_range(1, MAX_EVENT_RANGE + 1),
            Err(LedgerError::InvalidRange)
        );
    }
}
