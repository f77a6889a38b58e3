use soroban_sdk::{contracttype, Address, Symbol, Vec};

/// Lifecycle phase of the ledger
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Active,
    Ended,
    /// Terminal. The record stays readable but never changes again.
    Destroyed,
}

/// A named voting option and its running tally
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub name: Symbol,
    pub tally: u32,
}

/// The single live ledger record.
///
/// Loaded once per invocation, mutated in memory by the component handlers
/// and written back only when the whole operation succeeds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerState {
    pub owner: Address,
    /// Backup administrator. Read-only: no operation checks it.
    pub second_owner: Address,
    pub phase: Phase,
    /// Asset that vote payments and withdrawals are settled in
    pub payment_token: Address,
    pub vote_cost: i128,
    /// Quota every voter starts each round with
    pub votes_per_voter: u32,
    pub total_votes: u32,
    pub balance: i128,
    pub winner: Option<Symbol>,
    /// Bumped by every reset; voter records from older rounds count as unused
    pub round: u32,
    /// Proposal set in canonical (declaration) order
    pub proposals: Vec<Proposal>,
}

/// Votes cast by one account in a given round
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRecord {
    pub round: u32,
    pub cast: u32,
}

/// Domain events, with the fields each one carries
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventKind {
    /// (owner)
    Initialized(Address),
    /// (voter, proposal, new tally)
    Voted(Address, Symbol, u32),
    VotingEnded,
    /// (winning proposal)
    WinnerDeclared(Symbol),
    VotingReset,
    /// (previous owner, new owner)
    OwnershipTransferred(Address, Address),
    ContractDestroyed,
    /// (recipient, amount). Audit record for withdrawals.
    FundsWithdrawn(Address, i128),
}

/// A committed entry of the event log
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerEvent {
    /// 1-based, contiguous position in the log
    pub position: u64,
    /// Ledger sequence when committed
    pub ledger: u32,
    pub timestamp: u64,
    pub kind: EventKind,
}

/// One replayed vote, as shown in the client's history view
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteHistoryEntry {
    pub proposal: Symbol,
    pub votes: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    State,
    Voter(Address),
    EventCount,
    Event(u64),
}
