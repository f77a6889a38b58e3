use soroban_sdk::contracterror;

/// Error codes returned by every ledger entrypoint.
///
/// - 1-9: operation failures
/// - 10-19: genesis and input errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Caller is not the current owner
    PermissionDenied = 1,
    /// Operation is not legal in the current phase
    InvalidState = 2,
    /// Attached payment differs from the vote cost
    PaymentMismatch = 3,
    /// Voter has no votes left in this round
    QuotaExhausted = 4,
    /// Proposal name is not part of the proposal set
    UnknownProposal = 5,
    /// Address cannot hold the requested role
    InvalidAddress = 6,
    /// Ledger has been destroyed
    AlreadyDestroyed = 7,

    NotInitialized = 10,
    AlreadyInitialized = 11,
    InvalidInput = 12,
    /// Event range is empty, inverted, or too wide
    InvalidRange = 13,
    Overflow = 14,
}
